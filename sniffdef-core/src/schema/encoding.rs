//! Record encodings the sniffer can produce.

use std::str::FromStr;

use crate::error::Error;

/// How the records of one capture file (or bus message) are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Encoding {
    /// Tab-separated text, one record per line (`*.csv` files)
    Csv,
    /// Fixed binary rows (`*.chb` files)
    RowBinary,
}

impl Encoding {
    /// Every supported encoding.
    pub const ALL: [Encoding; 2] = [Encoding::Csv, Encoding::RowBinary];

    /// Canonical configuration name.
    pub const fn name(&self) -> &'static str {
        match self {
            Encoding::Csv => "csv",
            Encoding::RowBinary => "rowbinary",
        }
    }

    /// Extension the sniffer gives capture files of this encoding.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Encoding::Csv => "csv",
            Encoding::RowBinary => "chb",
        }
    }

    /// Extra topic namespace segment for bus transport, if any.
    pub const fn topic_segment(&self) -> Option<&'static str> {
        match self {
            Encoding::Csv => None,
            Encoding::RowBinary => Some("chb"),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" | "text" | "tsv" => Ok(Encoding::Csv),
            "rowbinary" | "row-binary" | "chb" | "binary" => Ok(Encoding::RowBinary),
            _ => Err(Error::UnknownEncoding(s.to_string())),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
