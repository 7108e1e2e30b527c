//! Batch generation with skip-and-report.

use tracing::{info, warn};

use sniffdef_core::transport::bind;
use sniffdef_core::{Emitter, Error as CoreError, IngestionDefinition, SchemaKey, SchemaRegistry};

use crate::config::GenerationPlan;
use crate::error::Result;

/// A requested schema that produced no definition.
#[derive(Debug)]
pub struct Skipped {
    pub key: SchemaKey,
    pub error: CoreError,
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub definitions: Vec<IngestionDefinition>,
    pub skipped: Vec<Skipped>,
}

impl GenerationReport {
    /// True when every requested schema produced a definition.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Render every (version, protocol) pair of the plan.
///
/// Missing or rejected schemas are skipped and reported; the rest are still
/// rendered. Two items rendering the same definition name fail the batch.
pub fn generate(registry: &SchemaRegistry, plan: &GenerationPlan) -> Result<GenerationReport> {
    let mut items = Vec::new();
    let mut skipped = Vec::new();

    for version in &plan.versions {
        for &protocol in &plan.protocols {
            let key = SchemaKey::new(protocol, version.clone(), plan.encoding);
            match registry.get(&key) {
                Ok(schema) => {
                    let binding = bind(plan.transport, &key, &plan.options);
                    items.push((schema, binding));
                }
                Err(
                    error @ (CoreError::SchemaNotFound { .. }
                    | CoreError::SchemaValidation { .. }),
                ) => {
                    warn!(%key, %error, "skipping definition");
                    skipped.push(Skipped { key, error });
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    let definitions = Emitter::new(plan.style).emit_all(items)?;
    info!(
        generated = definitions.len(),
        skipped = skipped.len(),
        transport = %plan.transport,
        encoding = %plan.encoding,
        "generation finished"
    );

    Ok(GenerationReport {
        definitions,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use sniffdef_core::default_registry;

    #[test]
    fn test_generate_all_defaults() {
        let plan = GenerationConfig::default().resolve().unwrap();
        let report = generate(&default_registry(), &plan).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.definitions.len(), 13);
        assert_eq!(report.definitions[0].name(), "tcp");
    }

    #[test]
    fn test_unknown_version_is_skipped() {
        let config = GenerationConfig {
            versions: vec!["v29".to_string(), "v30".to_string()],
            protocols: vec!["udp".to_string()],
            ..Default::default()
        };
        let plan = config.resolve().unwrap();
        let report = generate(&default_registry(), &plan).unwrap();

        assert_eq!(report.definitions.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(
            report.skipped[0].error,
            CoreError::SchemaNotFound { .. }
        ));
    }
}
