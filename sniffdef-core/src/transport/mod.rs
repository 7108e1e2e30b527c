//! Source-transport binding.
//!
//! Turns a transport choice plus generic options into the concrete
//! parameters one definition reads from: a file glob for [`TransportKind::File`]
//! or a bus topic for [`TransportKind::Bus`]. Binding is pure; nothing here
//! touches the filesystem or the broker.

mod bus;
mod file;

use std::str::FromStr;

pub use bus::{BusBinding, BusOptions};
pub use file::{FileBinding, FileOptions, DECOMPRESSOR};

use crate::error::Error;
use crate::protocol::{file_token, topic_token};
use crate::schema::SchemaKey;

/// How records reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// Capture files matched by a glob
    File,
    /// A message-bus topic
    Bus,
}

impl TransportKind {
    pub const fn name(&self) -> &'static str {
        match self {
            TransportKind::File => "file",
            TransportKind::Bus => "bus",
        }
    }
}

impl FromStr for TransportKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "files" => Ok(TransportKind::File),
            "bus" | "kafka" => Ok(TransportKind::Bus),
            _ => Err(Error::UnsupportedTransport(s.to_string())),
        }
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for both transports; only the chosen one is consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOptions {
    pub files: FileOptions,
    pub bus: BusOptions,
}

/// Resolved transport parameters for one definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceBinding {
    File(FileBinding),
    Bus(BusBinding),
}

impl SourceBinding {
    pub fn kind(&self) -> TransportKind {
        match self {
            SourceBinding::File(_) => TransportKind::File,
            SourceBinding::Bus(_) => TransportKind::Bus,
        }
    }
}

/// Bind a schema key to a transport, resolving its file pattern or topic.
pub fn bind(kind: TransportKind, key: &SchemaKey, options: &TransportOptions) -> SourceBinding {
    match kind {
        TransportKind::File => SourceBinding::File(FileBinding::new(
            &options.files,
            file_token(key.protocol, key.encoding),
            &key.version,
            key.encoding,
        )),
        TransportKind::Bus => SourceBinding::Bus(BusBinding::new(
            &options.bus,
            topic_token(key.protocol, key.encoding),
            key.encoding,
        )),
    }
}
