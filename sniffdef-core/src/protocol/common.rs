//! Field groups shared by every flow record.

use crate::schema::{DataKind, FieldDescriptor, CAPTURE_BEGIN, CAPTURE_END};

/// Leading columns of every v30 record: poller identity, capture window,
/// packet sources, VLANs, MACs and zones.
pub(super) fn flow_header() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("poller", DataKind::String),
        FieldDescriptor::capture_timestamp(CAPTURE_BEGIN),
        FieldDescriptor::capture_timestamp(CAPTURE_END),
        FieldDescriptor::nullable("pkt_source_kind_client", DataKind::UInt8),
        FieldDescriptor::nullable("pkt_source_name_client", DataKind::String),
        FieldDescriptor::nullable("pkt_source_kind_server", DataKind::UInt8),
        FieldDescriptor::nullable("pkt_source_name_server", DataKind::String),
        FieldDescriptor::nullable("vlan_client", DataKind::UInt32),
        FieldDescriptor::nullable("vlan_server", DataKind::UInt32),
        FieldDescriptor::mac_field("mac_client"),
        FieldDescriptor::mac_field("mac_server"),
        FieldDescriptor::new("zone_client", DataKind::UInt32),
        FieldDescriptor::new("zone_server", DataKind::UInt32),
    ]
}

/// Client and server addresses; exactly one of each v4/v6 pair is set.
pub(super) fn ip_endpoints() -> [FieldDescriptor; 4] {
    [
        FieldDescriptor::ipv4_field("ip4_client"),
        FieldDescriptor::ipv6_field("ip6_client"),
        FieldDescriptor::ipv4_field("ip4_server"),
        FieldDescriptor::ipv6_field("ip6_server"),
    ]
}

/// Address seen after NAT, when the sniffer knows it.
pub(super) fn external_endpoint() -> [FieldDescriptor; 2] {
    [
        FieldDescriptor::ipv4_field("ip4_external"),
        FieldDescriptor::ipv6_field("ip6_external"),
    ]
}

pub(super) fn ports() -> [FieldDescriptor; 2] {
    [
        FieldDescriptor::new("port_client", DataKind::UInt16),
        FieldDescriptor::new("port_server", DataKind::UInt16),
    ]
}

pub(super) fn diffserv() -> [FieldDescriptor; 2] {
    [
        FieldDescriptor::new("diffserv_client", DataKind::UInt8),
        FieldDescriptor::new("diffserv_server", DataKind::UInt8),
    ]
}

pub(super) fn mtu() -> [FieldDescriptor; 2] {
    [
        FieldDescriptor::bytes("mtu_client", DataKind::UInt32).set_nullable(true),
        FieldDescriptor::bytes("mtu_server", DataKind::UInt32).set_nullable(true),
    ]
}

/// Wire volume with unannotated packet counters.
pub(super) fn traffic() -> [FieldDescriptor; 4] {
    [
        FieldDescriptor::bytes("traffic_bytes_client", DataKind::UInt64),
        FieldDescriptor::bytes("traffic_bytes_server", DataKind::UInt64),
        FieldDescriptor::new("traffic_packets_client", DataKind::UInt32),
        FieldDescriptor::new("traffic_packets_server", DataKind::UInt32),
    ]
}

/// A count/sum/sum-of-squares triple over microsecond durations.
pub(super) fn timing(
    count: &'static str,
    sum: &'static str,
    square_sum: &'static str,
) -> [FieldDescriptor; 3] {
    [
        FieldDescriptor::count(count),
        FieldDescriptor::micros_sum(sum),
        FieldDescriptor::micros_square_sum(square_sum),
    ]
}

/// Same as [`timing`] but the count may be NULL while the sums may not.
pub(super) fn timing_nullable_count(
    count: &'static str,
    sum: &'static str,
    square_sum: &'static str,
) -> [FieldDescriptor; 3] {
    [
        FieldDescriptor::count(count).set_nullable(true),
        FieldDescriptor::micros_sum(sum),
        FieldDescriptor::micros_square_sum(square_sum),
    ]
}

pub(super) fn server_response_time() -> [FieldDescriptor; 3] {
    timing("rt_count_server", "rt_sum_server", "rt_square_sum_server")
}

pub(super) fn data_transfer_time() -> [FieldDescriptor; 6] {
    let [a, b, c] = timing("dtt_count_client", "dtt_sum_client", "dtt_square_sum_client");
    let [d, e, f] = timing("dtt_count_server", "dtt_sum_server", "dtt_square_sum_server");
    [a, b, c, d, e, f]
}
