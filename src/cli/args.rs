//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{GenerationConfig, Style};

/// Generate Ramen ingestion definitions for sniffer captures.
#[derive(Parser, Debug)]
#[command(name = "sniffdef")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Protocols to generate (default: all)
    #[arg(value_name = "PROTOCOL")]
    pub protocols: Vec<String>,

    /// TOML run configuration
    #[arg(short = 'c', long = "config", env = "SNIFFDEF_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Transport: file or bus
    #[arg(short = 't', long = "transport")]
    pub transport: Option<String>,

    /// Record encoding: csv or rowbinary
    #[arg(short = 'e', long = "encoding")]
    pub encoding: Option<String>,

    /// Inline transport values or emit program parameters
    #[arg(long = "style", value_enum)]
    pub style: Option<Style>,

    /// Schema version to generate (repeatable)
    #[arg(long = "schema-version", value_name = "VERSION")]
    pub versions: Vec<String>,

    /// Directory of <file token>.txt layout files overriding the built-ins
    #[arg(long = "layouts", value_name = "DIR")]
    pub layouts: Option<PathBuf>,

    /// Capture file path prefix
    #[arg(long = "prefix")]
    pub prefix: Option<String>,

    /// Capture files are lz4 compressed
    #[arg(long = "compressed", num_args = 0..=1, default_missing_value = "true")]
    pub compressed: Option<bool>,

    /// Delete capture files once read
    #[arg(long = "delete", num_args = 0..=1, default_missing_value = "true")]
    pub delete: Option<bool>,

    /// Bus broker list
    #[arg(long = "broker")]
    pub broker: Option<String>,

    /// Bus topic namespace
    #[arg(long = "namespace")]
    pub namespace: Option<String>,

    /// Bus fetch limit in bytes (0 to omit)
    #[arg(long = "max-message-size", value_name = "BYTES")]
    pub max_message_size: Option<u64>,

    /// Write the program to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write one <name>.ramen file per definition
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// List protocols and their naming tables
    #[arg(long = "list-protocols")]
    pub list_protocols: bool,

    /// Show the field layout of a protocol
    #[arg(long = "schema", value_name = "PROTOCOL")]
    pub schema: Option<String>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Layer the flags that were given over `config`.
    pub fn apply(&self, config: &mut GenerationConfig) {
        if !self.protocols.is_empty() {
            config.protocols = self.protocols.clone();
        }
        if let Some(transport) = &self.transport {
            config.transport = transport.clone();
        }
        if let Some(encoding) = &self.encoding {
            config.encoding = encoding.clone();
        }
        if let Some(style) = self.style {
            config.style = style;
        }
        if !self.versions.is_empty() {
            config.versions = self.versions.clone();
        }
        if let Some(layouts) = &self.layouts {
            config.layouts = Some(layouts.clone());
        }
        if let Some(prefix) = &self.prefix {
            config.files.prefix = prefix.clone();
        }
        if let Some(compressed) = self.compressed {
            config.files.compressed = compressed;
        }
        if let Some(delete) = self.delete {
            config.files.delete = delete;
        }
        if let Some(broker) = &self.broker {
            config.bus.broker = broker.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.bus.namespace = namespace.clone();
        }
        if let Some(max) = self.max_message_size {
            config.bus.max_message_size = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "sniffdef",
            "tcp",
            "--transport",
            "bus",
            "--broker",
            "broker:9092",
            "--delete",
            "false",
            "--compressed",
        ]);
        let mut config = GenerationConfig::default();
        args.apply(&mut config);

        assert_eq!(config.transport, "bus");
        assert_eq!(config.bus.broker, "broker:9092");
        assert!(!config.files.delete);
        assert!(config.files.compressed);
        assert_eq!(config.protocols, vec!["tcp".to_string()]);
        assert_eq!(config.encoding, "csv");
    }

    #[test]
    fn test_output_conflicts() {
        assert!(Args::try_parse_from(["sniffdef", "-o", "a.ramen", "--output-dir", "out"]).is_err());
    }
}
