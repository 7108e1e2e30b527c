//! Records for IP protocols other than TCP, UDP and ICMP.

use super::common::{diffserv, flow_header, ip_endpoints, mtu, traffic};
use crate::schema::{DataKind, FieldDescriptor};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(diffserv());
    fields.extend(mtu());
    fields.extend([
        FieldDescriptor::new("ip_protocol", DataKind::UInt8),
        FieldDescriptor::new("application", DataKind::UInt32),
        FieldDescriptor::nullable("protostack", DataKind::String),
    ]);
    fields.extend(traffic());
    fields
}
