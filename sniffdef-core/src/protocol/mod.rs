//! Capture protocols and their built-in record layouts.
//!
//! This module provides:
//! - [`Protocol`], the closed set of record families the sniffer emits
//! - [`SchemaRegistry`] holding validated layouts per protocol, version and encoding
//! - The naming tables mapping a protocol to file, topic and definition names
//!
//! ## Supported Protocols
//!
//! | Family | Protocols |
//! |--------|-----------|
//! | Flow | TCP, UDP, ICMP, other IP, non-IP |
//! | Application | DNS, HTTP, SMB, SQL, VoIP, TLS |
//! | Citrix | with channels, without channels |
//!
//! ## Example
//!
//! ```rust
//! use sniffdef_core::protocol::{default_registry, Protocol};
//! use sniffdef_core::schema::{Encoding, SchemaVersion};
//!
//! let registry = default_registry();
//! let tcp = registry
//!     .schema_for(Protocol::Tcp, &SchemaVersion::V30, Encoding::Csv)
//!     .unwrap();
//! assert_eq!(tcp.fields()[0].name(), "poller");
//! ```

mod common;
mod naming;
mod registry;

// Layout tables
mod citrix;
mod dns;
mod http;
mod icmp;
mod non_ip;
mod other_ip;
mod smb;
mod sql;
mod tcp;
mod tls;
mod udp;
mod voip;

use std::str::FromStr;

pub use naming::{definition_name, file_token, topic_token};
pub use registry::{default_registry, SchemaRegistry};

use crate::error::Error;
use crate::schema::FieldDescriptor;

/// A record family with its own layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
    OtherIp,
    NonIp,
    Dns,
    Http,
    /// Citrix records split per virtual channel
    Citrix,
    /// Citrix records aggregated over all channels
    CitrixChanless,
    Smb,
    Sql,
    Voip,
    Tls,
}

impl Protocol {
    /// Every protocol, in the order definitions are generated.
    pub const ALL: [Protocol; 13] = [
        Protocol::Tcp,
        Protocol::Udp,
        Protocol::Icmp,
        Protocol::OtherIp,
        Protocol::NonIp,
        Protocol::Dns,
        Protocol::Http,
        Protocol::Citrix,
        Protocol::CitrixChanless,
        Protocol::Smb,
        Protocol::Sql,
        Protocol::Voip,
        Protocol::Tls,
    ];

    /// Protocol key used in configuration (e.g., "other_ip").
    pub const fn name(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
            Protocol::Icmp => "icmp",
            Protocol::OtherIp => "other_ip",
            Protocol::NonIp => "non_ip",
            Protocol::Dns => "dns",
            Protocol::Http => "http",
            Protocol::Citrix => "citrix",
            Protocol::CitrixChanless => "citrix_chanless",
            Protocol::Smb => "smb",
            Protocol::Sql => "sql",
            Protocol::Voip => "voip",
            Protocol::Tls => "tls",
        }
    }

    /// Human-readable name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
            Protocol::Icmp => "ICMP",
            Protocol::OtherIp => "Other IP",
            Protocol::NonIp => "Non-IP",
            Protocol::Dns => "DNS",
            Protocol::Http => "HTTP",
            Protocol::Citrix => "Citrix (channels)",
            Protocol::CitrixChanless => "Citrix (no channels)",
            Protocol::Smb => "SMB",
            Protocol::Sql => "SQL",
            Protocol::Voip => "VoIP",
            Protocol::Tls => "TLS",
        }
    }

    /// The built-in v30 field layout.
    pub fn v30_fields(&self) -> Vec<FieldDescriptor> {
        match self {
            Protocol::Tcp => tcp::v30(),
            Protocol::Udp => udp::v30(),
            Protocol::Icmp => icmp::v30(),
            Protocol::OtherIp => other_ip::v30(),
            Protocol::NonIp => non_ip::v30(),
            Protocol::Dns => dns::v30(),
            Protocol::Http => http::v30(),
            Protocol::Citrix => citrix::channels_v30(),
            Protocol::CitrixChanless => citrix::chanless_v30(),
            Protocol::Smb => smb::v30(),
            Protocol::Sql => sql::v30(),
            Protocol::Voip => voip::v30(),
            Protocol::Tls => tls::v30(),
        }
    }
}

impl FromStr for Protocol {
    type Err = Error;

    /// Accepts the configuration key, case-insensitively, with `-` for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Protocol::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| Error::UnknownProtocol(s.to_string()))
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
