//! Protocol naming tables.
//!
//! The sniffer names capture files and bus topics independently of each
//! other and of the definitions that read them, and the names drifted apart
//! over time (Citrix files and topics are swapped, RowBinary SQL goes to
//! `databases`). Each mapping is therefore its own table rather than a
//! rule.

use crate::schema::Encoding;

use super::Protocol;

/// Token identifying a protocol's capture files (and external layout file).
pub fn file_token(protocol: Protocol, encoding: Encoding) -> &'static str {
    match (protocol, encoding) {
        (Protocol::Citrix, Encoding::Csv) => "citrix",
        (Protocol::Citrix, Encoding::RowBinary) => "citrix_channels",
        (Protocol::CitrixChanless, Encoding::Csv) => "citrix_chanless",
        (Protocol::CitrixChanless, Encoding::RowBinary) => "citrix",
        (Protocol::Sql, Encoding::RowBinary) => "databases",
        (protocol, _) => protocol.name(),
    }
}

/// Token identifying a protocol's bus topic, before namespacing.
pub fn topic_token(protocol: Protocol, encoding: Encoding) -> &'static str {
    match (protocol, encoding) {
        (Protocol::Citrix, _) => "citrix_channels",
        (Protocol::CitrixChanless, _) => "citrix",
        (Protocol::Sql, Encoding::RowBinary) => "databases",
        (protocol, _) => protocol.name(),
    }
}

/// Name of the generated definition. May need quoting when rendered.
pub fn definition_name(protocol: Protocol, encoding: Encoding) -> &'static str {
    match (protocol, encoding) {
        (Protocol::Tcp, Encoding::Csv) => "tcp",
        (Protocol::Udp, Encoding::Csv) => "udp",
        (Protocol::Icmp, Encoding::Csv) => "icmp",
        (Protocol::OtherIp, Encoding::Csv) => "other-ip",
        (Protocol::NonIp, Encoding::Csv) => "non-ip",
        (Protocol::Dns, Encoding::Csv) => "dns",
        (Protocol::Http, Encoding::Csv) => "http",
        (Protocol::Citrix, Encoding::Csv) => "citrix",
        (Protocol::CitrixChanless, Encoding::Csv) => "citrix_chanless",
        (Protocol::Smb, Encoding::Csv) => "smb",
        (Protocol::Sql, Encoding::Csv) => "sql",
        (Protocol::Voip, Encoding::Csv) => "voip",
        (Protocol::Tls, Encoding::Csv) => "tls",
        (Protocol::Tcp, Encoding::RowBinary) => "tcp_ext",
        (Protocol::Udp, Encoding::RowBinary) => "udp_ext",
        (Protocol::Icmp, Encoding::RowBinary) => "icmp_ext",
        (Protocol::OtherIp, Encoding::RowBinary) => "other-ip_ext",
        (Protocol::NonIp, Encoding::RowBinary) => "non-ip_ext",
        (Protocol::Dns, Encoding::RowBinary) => "dns_ext",
        (Protocol::Http, Encoding::RowBinary) => "http_ext",
        (Protocol::Citrix, Encoding::RowBinary) => "citrix_channels_ext",
        (Protocol::CitrixChanless, Encoding::RowBinary) => "citrix_ext",
        (Protocol::Smb, Encoding::RowBinary) => "smb_ext",
        (Protocol::Sql, Encoding::RowBinary) => "sql_ext",
        (Protocol::Voip, Encoding::RowBinary) => "voip_ext",
        (Protocol::Tls, Encoding::RowBinary) => "tls_ext",
    }
}
