//! Run configuration.
//!
//! Settings come from an optional TOML file with CLI flags layered on top.
//! Every key has a default, so an empty file (or none) generates the v30
//! CSV file definitions for all protocols.
//!
//! ```toml
//! transport = "file"            # file | files | bus | kafka
//! encoding = "csv"              # csv | rowbinary
//! style = "resolved"            # resolved | parameterized
//! protocols = []                # empty = all
//! versions = ["v30"]
//! layouts = "/etc/sniffdef/layouts"
//!
//! [files]
//! prefix = "/srv/nova/ramen/*.*."
//! compressed = false
//! delete = true
//!
//! [bus]
//! broker = "localhost:9092"
//! namespace = "pvx"
//! max_message_size = 1000000   # 0 omits the fetch limit
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sniffdef_core::transport::{BusOptions, FileOptions};
use sniffdef_core::{
    Encoding, Protocol, SchemaVersion, SourceStyle, TransportKind, TransportOptions,
};

use crate::error::ConfigError;

/// Output style of the generated program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Transport values inlined in every definition
    #[default]
    Resolved,
    /// Transport values as program parameters
    Parameterized,
}

impl From<Style> for SourceStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Resolved => SourceStyle::Resolved,
            Style::Parameterized => SourceStyle::Parameterized,
        }
    }
}

/// Unified configuration for one generation run.
///
/// Names are kept as strings until [`resolve`](Self::resolve), so a bad
/// transport or protocol is reported with the crate's own error rather than
/// a TOML type error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub transport: String,
    pub encoding: String,
    pub style: Style,
    pub protocols: Vec<String>,
    pub versions: Vec<String>,
    /// Directory of `<file token>.txt` layout files
    pub layouts: Option<PathBuf>,
    pub files: FilesConfig,
    pub bus: BusConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::File.name().to_string(),
            encoding: Encoding::Csv.name().to_string(),
            style: Style::default(),
            protocols: Vec::new(),
            versions: vec![SchemaVersion::V30.to_string()],
            layouts: None,
            files: FilesConfig::default(),
            bus: BusConfig::default(),
        }
    }
}

/// File transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    pub prefix: String,
    pub compressed: bool,
    pub delete: bool,
}

impl Default for FilesConfig {
    fn default() -> Self {
        let defaults = FileOptions::default();
        Self {
            prefix: defaults.prefix,
            compressed: defaults.compressed,
            delete: defaults.delete,
        }
    }
}

/// Bus transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusConfig {
    pub broker: String,
    pub namespace: String,
    pub max_message_size: u64,
}

impl Default for BusConfig {
    fn default() -> Self {
        let defaults = BusOptions::default();
        Self {
            broker: defaults.broker,
            namespace: defaults.namespace,
            max_message_size: defaults.max_message_size.unwrap_or(0),
        }
    }
}

impl GenerationConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Check every name and turn the configuration into a plan.
    pub fn resolve(&self) -> sniffdef_core::Result<GenerationPlan> {
        let transport = self.transport.parse::<TransportKind>()?;
        let encoding = self.encoding.parse::<Encoding>()?;

        let protocols = if self.protocols.is_empty() {
            Protocol::ALL.to_vec()
        } else {
            self.protocols
                .iter()
                .map(|p| p.parse())
                .collect::<sniffdef_core::Result<Vec<Protocol>>>()?
        };

        let versions = self
            .versions
            .iter()
            .map(|v| v.parse())
            .collect::<sniffdef_core::Result<Vec<SchemaVersion>>>()?;

        let options = TransportOptions {
            files: FileOptions {
                prefix: self.files.prefix.clone(),
                compressed: self.files.compressed,
                delete: self.files.delete,
            },
            bus: BusOptions {
                broker: self.bus.broker.clone(),
                namespace: self.bus.namespace.clone(),
                max_message_size: (self.bus.max_message_size > 0)
                    .then_some(self.bus.max_message_size),
            },
        };

        Ok(GenerationPlan {
            transport,
            encoding,
            style: self.style.into(),
            protocols,
            versions,
            layouts: self.layouts.clone(),
            options,
        })
    }
}

/// A validated run: what to generate and how to bind it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPlan {
    pub transport: TransportKind,
    pub encoding: Encoding,
    pub style: SourceStyle,
    pub protocols: Vec<Protocol>,
    pub versions: Vec<SchemaVersion>,
    pub layouts: Option<PathBuf>,
    pub options: TransportOptions,
}
