//! VoIP call records (SIP, H.323, Skinny, MGCP).
//!
//! Media statistics are keyed by caller/callee rather than client/server.

use super::common::{flow_header, ip_endpoints, ports, server_response_time, timing};
use crate::schema::{DataKind, FieldDescriptor};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(ports());
    fields.extend([
        FieldDescriptor::nullable("capture_file", DataKind::String),
        FieldDescriptor::new("application", DataKind::UInt32),
        FieldDescriptor::nullable("protostack", DataKind::String),
        FieldDescriptor::nullable("connection_uuid", DataKind::String),
        FieldDescriptor::new("ip_protocol", DataKind::UInt8),
        FieldDescriptor::new("had_voice", DataKind::Bool),
        FieldDescriptor::nullable("call_direction_is_out", DataKind::Bool),
        FieldDescriptor::new("last_call_state", DataKind::UInt8),
        FieldDescriptor::new("is_starting", DataKind::Bool),
        FieldDescriptor::new("is_finished", DataKind::Bool),
        FieldDescriptor::new("_hardcoded_0", DataKind::Bool).with_description("Always false"),
        FieldDescriptor::new("last_error", DataKind::UInt32),
        FieldDescriptor::new("call_id", DataKind::String),
        FieldDescriptor::nullable("rtp_duration", DataKind::UInt64),
    ]);
    // Unlike the flow header MACs, caller/callee MACs are never NULL.
    fields.extend([
        FieldDescriptor::new("id_caller", DataKind::String),
        FieldDescriptor::new("caller_mac", DataKind::UInt64),
        FieldDescriptor::ipv4_field("ip4_caller"),
        FieldDescriptor::ipv6_field("ip6_caller"),
        FieldDescriptor::new("zone_caller", DataKind::UInt32),
        FieldDescriptor::nullable("caller_codec", DataKind::String),
        FieldDescriptor::new("id_callee", DataKind::String),
        FieldDescriptor::new("callee_mac", DataKind::UInt64),
        FieldDescriptor::ipv4_field("ip4_callee"),
        FieldDescriptor::ipv6_field("ip6_callee"),
        FieldDescriptor::new("zone_callee", DataKind::UInt32),
        FieldDescriptor::nullable("callee_codec", DataKind::String),
    ]);
    fields.extend([
        FieldDescriptor::bytes("sign_bytes_client", DataKind::UInt32),
        FieldDescriptor::bytes("sign_bytes_server", DataKind::UInt32),
        FieldDescriptor::count("sign_count_client"),
        FieldDescriptor::count("sign_count_server"),
        FieldDescriptor::bytes("sign_payload_client", DataKind::UInt32),
        FieldDescriptor::bytes("sign_payload_server", DataKind::UInt32),
        FieldDescriptor::bytes("rtp_rtcp_bytes_caller", DataKind::UInt32),
        FieldDescriptor::bytes("rtp_rtcp_bytes_callee", DataKind::UInt32),
        FieldDescriptor::count("rtp_rtcp_count_caller"),
        FieldDescriptor::count("rtp_rtcp_count_callee"),
        FieldDescriptor::bytes("rtp_rtcp_payload_caller", DataKind::UInt32),
        FieldDescriptor::bytes("rtp_rtcp_payload_callee", DataKind::UInt32),
    ]);
    fields.extend(server_response_time());
    fields.extend(timing(
        "jitter_count_caller",
        "jitter_sum_caller",
        "jitter_square_sum_caller",
    ));
    fields.extend(timing(
        "jitter_count_callee",
        "jitter_sum_callee",
        "jitter_square_sum_callee",
    ));
    fields.extend(timing(
        "rtt_count_caller",
        "rtt_sum_caller",
        "rtt_square_sum_caller",
    ));
    fields.extend(timing(
        "rtt_count_callee",
        "rtt_sum_callee",
        "rtt_square_sum_callee",
    ));
    fields.extend([
        FieldDescriptor::count("loss_callee2caller_alt_count"),
        FieldDescriptor::count("loss_caller2callee_alt_count"),
    ]);
    fields.extend(timing(
        "sign_rtt_count_client",
        "sign_rtt_sum_client",
        "sign_rtt_square_sum_client",
    ));
    fields.extend(timing(
        "sign_rtt_count_server",
        "sign_rtt_sum_server",
        "sign_rtt_square_sum_server",
    ));
    fields.extend(timing(
        "sign_rd_count_client",
        "sign_rd_sum_client",
        "sign_rd_square_sum_client",
    ));
    fields.extend(timing(
        "sign_rd_count_server",
        "sign_rd_sum_server",
        "sign_rd_square_sum_server",
    ));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_mac_not_nullable() {
        let fields = v30();
        let mac = |name: &str| fields.iter().find(|f| f.name() == name).map(|f| f.nullable);
        assert_eq!(mac("mac_client"), Some(true));
        assert_eq!(mac("caller_mac"), Some(false));
        assert_eq!(mac("callee_mac"), Some(false));
    }
}
