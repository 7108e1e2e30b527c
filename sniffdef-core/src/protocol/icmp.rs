//! ICMP flow records.

use super::common::{
    diffserv, external_endpoint, flow_header, ip_endpoints, mtu, traffic,
};
use crate::schema::{DataKind, FieldDescriptor};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(external_endpoint());
    fields.extend(diffserv());
    fields.extend(mtu());
    fields.extend([
        FieldDescriptor::new("application", DataKind::UInt32),
        FieldDescriptor::nullable("protostack", DataKind::String),
    ]);
    fields.extend(traffic());
    fields.extend([
        FieldDescriptor::new("icmp_type", DataKind::UInt8),
        FieldDescriptor::new("icmp_code", DataKind::UInt8),
        // Endpoints quoted inside an ICMP error message
        FieldDescriptor::ipv4_field("error_ip4_client"),
        FieldDescriptor::ipv6_field("error_ip6_client"),
        FieldDescriptor::ipv4_field("error_ip4_server"),
        FieldDescriptor::ipv6_field("error_ip6_server"),
        FieldDescriptor::nullable("error_port_client", DataKind::UInt16),
        FieldDescriptor::nullable("error_port_server", DataKind::UInt16),
        FieldDescriptor::nullable("error_ip_proto", DataKind::UInt8),
        FieldDescriptor::nullable("error_zone_client", DataKind::UInt32),
        FieldDescriptor::nullable("error_zone_server", DataKind::UInt32),
    ]);
    fields
}
