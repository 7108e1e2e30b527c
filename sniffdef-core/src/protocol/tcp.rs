//! TCP flow records.

use super::common::{
    diffserv, external_endpoint, flow_header, ip_endpoints, mtu, ports, timing_nullable_count,
    traffic,
};
use crate::schema::{DataKind, FieldDescriptor};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(external_endpoint());
    fields.extend(ports());
    fields.extend(diffserv());
    fields.extend([
        FieldDescriptor::nullable("os_client", DataKind::UInt8),
        FieldDescriptor::nullable("os_server", DataKind::UInt8),
    ]);
    fields.extend(mtu());
    fields.extend([
        FieldDescriptor::nullable("captured_pcap", DataKind::String),
        FieldDescriptor::new("application", DataKind::UInt32),
        FieldDescriptor::nullable("protostack", DataKind::String),
        FieldDescriptor::nullable("uuid", DataKind::String),
    ]);
    fields.extend(traffic());
    fields.extend([
        FieldDescriptor::bytes("payload_bytes_client", DataKind::UInt64),
        FieldDescriptor::bytes("payload_bytes_server", DataKind::UInt64),
        FieldDescriptor::new("payload_packets_client", DataKind::UInt32),
        FieldDescriptor::new("payload_packets_server", DataKind::UInt32),
        FieldDescriptor::bytes("retrans_traffic_bytes_client", DataKind::UInt64).set_nullable(true),
        FieldDescriptor::bytes("retrans_traffic_bytes_server", DataKind::UInt64).set_nullable(true),
        FieldDescriptor::bytes("retrans_payload_bytes_client", DataKind::UInt64).set_nullable(true),
        FieldDescriptor::bytes("retrans_payload_bytes_server", DataKind::UInt64).set_nullable(true),
        FieldDescriptor::count("syn_count_client").set_nullable(true),
        FieldDescriptor::count("fin_count_client").set_nullable(true),
        FieldDescriptor::count("fin_count_server").set_nullable(true),
        FieldDescriptor::count("rst_count_client").set_nullable(true),
        FieldDescriptor::count("rst_count_server").set_nullable(true),
        FieldDescriptor::count("timeout_count"),
        FieldDescriptor::count("close_count").set_nullable(true),
        FieldDescriptor::count("dupack_count_client").set_nullable(true),
        FieldDescriptor::count("dupack_count_server").set_nullable(true),
        FieldDescriptor::count("zero_window_count_client").set_nullable(true),
        FieldDescriptor::count("zero_window_count_server").set_nullable(true),
    ]);
    // Some counts can be null although the sums cannot.
    fields.extend(timing_nullable_count("ct_count", "ct_sum", "ct_square_sum"));
    fields.extend(timing_nullable_count(
        "rt_count_server",
        "rt_sum_server",
        "rt_square_sum_server",
    ));
    fields.extend(timing_nullable_count(
        "rtt_count_client",
        "rtt_sum_client",
        "rtt_square_sum_client",
    ));
    fields.extend(timing_nullable_count(
        "rtt_count_server",
        "rtt_sum_server",
        "rtt_square_sum_server",
    ));
    fields.extend(timing_nullable_count(
        "rd_count_client",
        "rd_sum_client",
        "rd_square_sum_client",
    ));
    fields.extend(timing_nullable_count(
        "rd_count_server",
        "rd_sum_server",
        "rd_square_sum_server",
    ));
    fields.extend(timing_nullable_count(
        "dtt_count_client",
        "dtt_sum_client",
        "dtt_square_sum_client",
    ));
    fields.extend(timing_nullable_count(
        "dtt_count_server",
        "dtt_sum_server",
        "dtt_square_sum_server",
    ));
    fields.push(FieldDescriptor::nullable("dcerpc_uuid", DataKind::String));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v30_layout() {
        let fields = v30();
        assert_eq!(fields.len(), 79);
        assert_eq!(fields[17].name(), "ip4_external");
        assert_eq!(fields[19].name(), "port_client");
        assert_eq!(fields.last().map(|f| f.name()), Some("dcerpc_uuid"));
    }
}
