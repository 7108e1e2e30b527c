//! UDP flow records.

use super::common::{
    diffserv, external_endpoint, flow_header, ip_endpoints, mtu, ports, traffic,
};
use crate::schema::{DataKind, FieldDescriptor};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(external_endpoint());
    fields.extend(ports());
    fields.extend(diffserv());
    fields.extend(mtu());
    fields.extend([
        FieldDescriptor::new("application", DataKind::UInt32),
        FieldDescriptor::nullable("protostack", DataKind::String),
    ]);
    fields.extend(traffic());
    fields.extend([
        FieldDescriptor::bytes("payload_bytes_client", DataKind::UInt64),
        FieldDescriptor::bytes("payload_bytes_server", DataKind::UInt64),
        FieldDescriptor::nullable("dcerpc_uuid", DataKind::String),
    ]);
    fields
}
