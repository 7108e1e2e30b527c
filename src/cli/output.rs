//! Output targets for generated programs.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use sniffdef_core::{Emitter, IngestionDefinition};

use crate::error::Result;

/// File extension of generated programs.
const PROGRAM_EXTENSION: &str = "ramen";

/// Where the generated program goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Whole program on stdout (default)
    Stdout,
    /// Whole program in one file
    File(PathBuf),
    /// One program per definition, named after it
    Dir(PathBuf),
}

impl OutputTarget {
    /// Pick a target from the `--output` / `--output-dir` flags.
    pub fn from_args(output: Option<&Path>, output_dir: Option<&Path>) -> Self {
        match (output, output_dir) {
            (_, Some(dir)) => OutputTarget::Dir(dir.to_path_buf()),
            (Some(file), None) => OutputTarget::File(file.to_path_buf()),
            (None, None) => OutputTarget::Stdout,
        }
    }

    /// Render and write `definitions`.
    pub fn write(&self, emitter: &Emitter, definitions: &[IngestionDefinition]) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(emitter.render_program(definitions).as_bytes())?;
                stdout.flush()?;
            }
            OutputTarget::File(path) => {
                fs::write(path, emitter.render_program(definitions))?;
                info!(path = %path.display(), definitions = definitions.len(), "wrote program");
            }
            OutputTarget::Dir(dir) => {
                fs::create_dir_all(dir)?;
                for definition in definitions {
                    let path = Self::definition_path(dir, definition);
                    fs::write(&path, emitter.render_program(std::slice::from_ref(definition)))?;
                }
                info!(dir = %dir.display(), definitions = definitions.len(), "wrote programs");
            }
        }
        Ok(())
    }

    /// `<dir>/<definition name>.ramen`
    pub fn definition_path(dir: &Path, definition: &IngestionDefinition) -> PathBuf {
        dir.join(format!("{}.{PROGRAM_EXTENSION}", definition.name()))
    }
}
