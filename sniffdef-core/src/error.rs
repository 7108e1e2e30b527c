//! Error types for sniffdef-core.
//!
//! - [`enum@Error`] - Every failure the registry, binder and emitter report
//! - [`ValidationError`] - Why a field layout was rejected
//!
//! No error here is transient: the same inputs always fail the same way,
//! so callers surface them rather than retry.

use thiserror::Error;

use crate::schema::SchemaKey;

/// Main error type for sniffdef-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No layout registered for the requested protocol/version/encoding
    #[error("no schema registered for {key}")]
    SchemaNotFound { key: SchemaKey },

    /// The layout for this key was rejected when it was loaded
    #[error("schema {key} rejected: {source}")]
    SchemaValidation {
        key: SchemaKey,
        #[source]
        source: ValidationError,
    },

    /// Transport kind other than file or bus
    #[error("unsupported transport '{0}' (expected one of: file, bus)")]
    UnsupportedTransport(String),

    /// Two requested items render the same definition name
    #[error("definition name {name} is produced by both {first} and {second}")]
    DuplicateDefinitionName {
        name: String,
        first: SchemaKey,
        second: SchemaKey,
    },

    /// Protocol name not in the naming tables
    #[error("unknown protocol '{0}'")]
    UnknownProtocol(String),

    /// Encoding name other than csv or rowbinary
    #[error("unknown encoding '{0}' (expected one of: csv, rowbinary)")]
    UnknownEncoding(String),

    /// Schema version that cannot be embedded in a file pattern
    #[error("invalid schema version '{0}'")]
    InvalidVersion(String),
}

/// Reasons a field layout fails load-time validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The layout has no fields at all
    #[error("layout declares no fields")]
    Empty,

    /// Layout text could not be parsed
    #[error("line {line}: {reason}")]
    Syntax { line: usize, reason: String },

    /// Type outside the fixed primitive set
    #[error("field '{field}' has unsupported type '{type_name}'")]
    UnknownType { field: String, type_name: String },

    /// Unit annotation not recognised
    #[error("field '{field}' has unknown unit '{{{unit}}}'")]
    UnknownUnit { field: String, unit: String },

    /// Field name that cannot be written unquoted in a field list
    #[error("'{name}' is not a valid field name")]
    InvalidFieldName { name: String },

    /// Same name at two positions (1-based)
    #[error("field '{name}' is declared twice (positions {first} and {second})")]
    DuplicateField {
        name: String,
        first: usize,
        second: usize,
    },

    /// A capture timestamp the window clause depends on is absent
    #[error("missing required timestamp field '{field}'")]
    MissingTimestamp { field: &'static str },

    /// A capture timestamp with the wrong shape
    #[error("timestamp field '{field}' must be a non-nullable unsigned integer, found {found}")]
    InvalidTimestamp { field: &'static str, found: String },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
