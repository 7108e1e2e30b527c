//! sniffdef - Generate Ramen ingestion definitions for sniffer captures.
//!
//! This library wires the [`sniffdef_core`] registry and emitter to a run
//! configuration, optional on-disk layout files and output targets.
//!
//! # Example
//!
//! ```no_run
//! use sniffdef::config::GenerationConfig;
//! use sniffdef::generate::generate;
//! use sniffdef_core::{default_registry, Emitter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let plan = GenerationConfig::from_file("sniffdef.toml")?.resolve()?;
//!     let report = generate(&default_registry(), &plan)?;
//!     print!("{}", Emitter::new(plan.style).render_program(&report.definitions));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod layouts;

pub use error::{ConfigError, Error, Result};
