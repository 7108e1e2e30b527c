//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```rust
//! use sniffdef_core::prelude::*;
//!
//! let registry = default_registry();
//! assert!(!registry.is_empty());
//! ```

// Schema types
pub use crate::schema::{
    fields_of, DataKind, Encoding, FieldDescriptor, ProtocolSchema, SchemaKey, SchemaVersion,
    Unit,
};

// Protocol types
pub use crate::protocol::{default_registry, Protocol, SchemaRegistry};

// Transport types
pub use crate::transport::{bind, SourceBinding, TransportKind, TransportOptions};

// Emitter types
pub use crate::emit::{emit, Emitter, IngestionDefinition, SourceStyle};

// Error types
pub use crate::error::{Error, Result};
