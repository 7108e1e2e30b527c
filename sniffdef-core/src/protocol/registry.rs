//! Schema registry keyed by protocol, version and encoding.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{Error, Result, ValidationError};
use crate::schema::{Encoding, FieldDescriptor, ProtocolSchema, SchemaKey, SchemaVersion};

use super::Protocol;

/// Validated record layouts, immutable once loading is done.
///
/// Each `(protocol, version, encoding)` is an independent entry, so legacy
/// and current capture formats coexist. A layout that fails validation is
/// remembered as rejected: lookups for it report why instead of
/// `SchemaNotFound`, and every other entry is unaffected.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<SchemaKey, Arc<ProtocolSchema>>,
    rejected: BTreeMap<SchemaKey, ValidationError>,
}

impl SchemaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a layout, replacing any previous entry for `key`.
    ///
    /// On failure the key is recorded as rejected and the error returned.
    pub fn register(&mut self, key: SchemaKey, fields: Vec<FieldDescriptor>) -> Result<()> {
        match ProtocolSchema::new(key.clone(), fields) {
            Ok(schema) => {
                self.insert(schema);
                Ok(())
            }
            Err(Error::SchemaValidation { key, source }) => {
                self.reject(key.clone(), source.clone());
                Err(Error::SchemaValidation { key, source })
            }
            Err(other) => Err(other),
        }
    }

    /// Register an already validated schema.
    pub fn insert(&mut self, schema: ProtocolSchema) {
        let key = schema.key().clone();
        debug!(%key, fields = schema.len(), "registered schema");
        self.rejected.remove(&key);
        self.schemas.insert(key, Arc::new(schema));
    }

    /// Record that the layout for `key` failed to load.
    pub fn reject(&mut self, key: SchemaKey, reason: ValidationError) {
        warn!(%key, %reason, "schema rejected");
        self.schemas.remove(&key);
        self.rejected.insert(key, reason);
    }

    /// Look up the schema for a protocol, version and encoding.
    pub fn schema_for(
        &self,
        protocol: Protocol,
        version: &SchemaVersion,
        encoding: Encoding,
    ) -> Result<Arc<ProtocolSchema>> {
        self.get(&SchemaKey::new(protocol, version.clone(), encoding))
    }

    /// Look up a schema by key.
    pub fn get(&self, key: &SchemaKey) -> Result<Arc<ProtocolSchema>> {
        if let Some(schema) = self.schemas.get(key) {
            return Ok(Arc::clone(schema));
        }
        match self.rejected.get(key) {
            Some(reason) => Err(Error::SchemaValidation {
                key: key.clone(),
                source: reason.clone(),
            }),
            None => Err(Error::SchemaNotFound { key: key.clone() }),
        }
    }

    /// Keys of every loaded schema, in protocol/version/encoding order.
    pub fn keys(&self) -> impl Iterator<Item = &SchemaKey> {
        self.schemas.keys()
    }

    /// Versions loaded for a protocol in any encoding.
    pub fn versions(&self, protocol: Protocol) -> Vec<SchemaVersion> {
        let mut versions: Vec<_> = self
            .schemas
            .keys()
            .filter(|k| k.protocol == protocol)
            .map(|k| k.version.clone())
            .collect();
        versions.dedup();
        versions
    }

    /// Layouts rejected at load and the reason for each.
    pub fn rejected(&self) -> impl Iterator<Item = (&SchemaKey, &ValidationError)> {
        self.rejected.iter()
    }

    /// Number of loaded schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Create a registry with the built-in v30 layouts of every protocol in
/// both encodings.
pub fn default_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();

    for protocol in Protocol::ALL {
        for encoding in Encoding::ALL {
            let key = SchemaKey::new(protocol, SchemaVersion::V30, encoding);
            // Failures are already recorded on the registry
            let _ = registry.register(key, protocol.v30_fields());
        }
    }

    debug!(
        schemas = registry.len(),
        rejected = registry.rejected.len(),
        "loaded built-in schemas"
    );
    registry
}
