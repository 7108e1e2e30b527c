//! # sniffdef-core
//!
//! Protocol schema registry and ingestion-definition generator for sniffer
//! captures.
//!
//! This crate holds the versioned record layouts the sniffer writes (one per
//! protocol) and renders, for each, the definition block the stream engine
//! needs to read those records from capture files or a message bus. It does
//! no I/O: callers supply options and get text back.
//!
//! ## Quick Start
//!
//! ```rust
//! use sniffdef_core::prelude::*;
//!
//! let registry = default_registry();
//! let schema = registry
//!     .schema_for(Protocol::Tcp, &SchemaVersion::V30, Encoding::Csv)
//!     .unwrap();
//!
//! let mut options = TransportOptions::default();
//! options.files.prefix = "/data/".to_string();
//! let binding = bind(TransportKind::File, schema.key(), &options);
//!
//! let definition = emit(&schema, &binding);
//! assert!(definition.text().contains("FILES \"/data/tcp_v30.*csv\""));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                        sniffdef-core                                |
//! +---------------------------------------------------------------------+
//! |  schema/     - FieldDescriptor, DataKind, Unit, layout parser       |
//! |  protocol/   - Protocol, v30 tables, naming tables, SchemaRegistry  |
//! |  transport/  - TransportKind, SourceBinding, bind()                 |
//! |  emit/       - Emitter, IngestionDefinition, window clause          |
//! |  error/      - Error types                                          |
//! +---------------------------------------------------------------------+
//! ```

pub mod emit;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod schema;
pub mod transport;

pub use emit::{emit, Emitter, IngestionDefinition, SourceStyle};
pub use error::{Error, Result, ValidationError};
pub use protocol::{default_registry, Protocol, SchemaRegistry};
pub use schema::{
    fields_of, DataKind, Encoding, FieldDescriptor, ProtocolSchema, SchemaKey, SchemaVersion,
    Unit,
};
pub use transport::{bind, SourceBinding, TransportKind, TransportOptions};
