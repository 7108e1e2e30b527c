//! Filesystem transport.

use crate::schema::{Encoding, SchemaVersion};

/// External filter that decompresses `.lz4` capture files.
pub const DECOMPRESSOR: &str = "lz4 -d -c";

/// Generic file transport options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOptions {
    /// Directory and filename prefix, may contain glob wildcards
    pub prefix: String,
    /// Files are lz4 compressed
    pub compressed: bool,
    /// Delete files once read
    pub delete: bool,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            prefix: "/srv/nova/ramen/*.*.".to_string(),
            compressed: false,
            delete: true,
        }
    }
}

/// Files one definition reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBinding {
    pub prefix: String,
    /// Protocol token and version suffix, e.g. `tcp_v30.*csv`
    pub pattern: String,
    pub compressed: bool,
    pub delete: bool,
}

impl FileBinding {
    pub(super) fn new(
        options: &FileOptions,
        token: &str,
        version: &SchemaVersion,
        encoding: Encoding,
    ) -> Self {
        // CSV files carry the exact version; RowBinary ones may add a
        // minor revision in front of it.
        let pattern = match encoding {
            Encoding::Csv => format!("{token}_{version}.*{}", encoding.file_extension()),
            Encoding::RowBinary => format!("{token}_*{version}.*{}", encoding.file_extension()),
        };
        Self {
            prefix: options.prefix.clone(),
            pattern,
            compressed: options.compressed,
            delete: options.delete,
        }
    }

    /// Full file glob.
    pub fn glob(&self) -> String {
        let suffix = if self.compressed { ".lz4" } else { "" };
        format!("{}{}{}", self.prefix, self.pattern, suffix)
    }

    /// Pre-filter command, present iff the files are compressed.
    pub fn preprocessor(&self) -> Option<&'static str> {
        self.compressed.then_some(DECOMPRESSOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rowbinary_pattern_matches_any_minor() {
        let binding = FileBinding::new(
            &FileOptions::default(),
            "databases",
            &SchemaVersion::V30,
            Encoding::RowBinary,
        );
        assert_eq!(binding.pattern, "databases_*v30.*chb");
    }

    #[test]
    fn test_compressed_glob() {
        let options = FileOptions {
            prefix: "/data/".to_string(),
            compressed: true,
            delete: false,
        };
        let binding = FileBinding::new(&options, "dns", &SchemaVersion::V30, Encoding::Csv);
        assert_eq!(binding.glob(), "/data/dns_v30.*csv.lz4");
        assert_eq!(binding.preprocessor(), Some("lz4 -d -c"));
        assert!(!binding.delete);
    }
}
