//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap, layered over the TOML run configuration
//! - Writing generated programs to stdout, a file or a directory

mod args;
mod output;

pub use args::Args;
pub use output::OutputTarget;
