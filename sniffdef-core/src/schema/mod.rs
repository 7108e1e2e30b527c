//! Capture record schemas.
//!
//! A [`ProtocolSchema`] is the ordered field layout of one protocol's
//! records for one schema version and one encoding. Field order is part of
//! the wire format: reordering breaks every capture already on disk.
//!
//! # Example
//!
//! ```rust
//! use sniffdef_core::schema::{DataKind, Encoding, FieldDescriptor, ProtocolSchema, SchemaKey, SchemaVersion, Unit};
//! use sniffdef_core::Protocol;
//!
//! let key = SchemaKey::new(Protocol::Tcp, SchemaVersion::V30, Encoding::Csv);
//! let schema = ProtocolSchema::new(key, vec![
//!     FieldDescriptor::new("poller", DataKind::String),
//!     FieldDescriptor::capture_timestamp("capture_begin"),
//!     FieldDescriptor::capture_timestamp("capture_end"),
//!     FieldDescriptor::nullable("mtu_client", DataKind::UInt32).with_unit(Unit::Bytes),
//! ]).unwrap();
//! assert_eq!(schema.position("capture_end"), Some(2));
//! ```

mod encoding;
mod field;
mod kind;
pub mod layout;
mod unit;
mod validate;

use std::borrow::Cow;
use std::str::FromStr;

pub use encoding::Encoding;
pub use field::FieldDescriptor;
pub use kind::DataKind;
pub use unit::Unit;
pub use validate::{validate_fields, CAPTURE_BEGIN, CAPTURE_END};

use crate::error::{Error, Result};
use crate::protocol::Protocol;

/// A named, immutable record-layout revision (e.g. `v30`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaVersion(Cow<'static, str>);

impl SchemaVersion {
    /// Capture format v30, the layout shipped with this build.
    pub const V30: SchemaVersion = SchemaVersion(Cow::Borrowed("v30"));

    /// Create a version after checking it can be embedded in a file glob.
    pub fn new(version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        let valid = !version.is_empty()
            && version
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if valid {
            Ok(Self(Cow::Owned(version)))
        } else {
            Err(Error::InvalidVersion(version))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SchemaVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a schema in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaKey {
    pub protocol: Protocol,
    pub version: SchemaVersion,
    pub encoding: Encoding,
}

impl SchemaKey {
    pub fn new(protocol: Protocol, version: SchemaVersion, encoding: Encoding) -> Self {
        Self {
            protocol,
            version,
            encoding,
        }
    }
}

impl std::fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.protocol, self.version, self.encoding)
    }
}

/// A protocol's complete, validated record layout.
///
/// The only constructor validates, so every `ProtocolSchema` in existence
/// declares both capture timestamps and has unique, well-formed names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolSchema {
    key: SchemaKey,
    fields: Vec<FieldDescriptor>,
}

impl ProtocolSchema {
    /// Validate `fields` and wrap them under `key`.
    pub fn new(key: SchemaKey, fields: Vec<FieldDescriptor>) -> Result<Self> {
        match validate_fields(&fields) {
            Ok(()) => Ok(Self { key, fields }),
            Err(source) => Err(Error::SchemaValidation { key, source }),
        }
    }

    pub fn key(&self) -> &SchemaKey {
        &self.key
    }

    pub fn protocol(&self) -> Protocol {
        self.key.protocol
    }

    pub fn version(&self) -> &SchemaVersion {
        &self.key.version
    }

    pub fn encoding(&self) -> Encoding {
        self.key.encoding
    }

    /// Ordered fields.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Zero-based ordinal of a field.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered fields of a schema.
pub fn fields_of(schema: &ProtocolSchema) -> &[FieldDescriptor] {
    schema.fields()
}
