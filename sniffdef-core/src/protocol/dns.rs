//! DNS query/answer records.

use super::common::{flow_header, ip_endpoints, server_response_time};
use crate::schema::{DataKind, FieldDescriptor};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend([
        FieldDescriptor::new("application", DataKind::UInt32),
        FieldDescriptor::nullable("protostack", DataKind::String),
        FieldDescriptor::new("_hardcoded_one_facepalm", DataKind::UInt8)
            .with_description("Always 1"),
        FieldDescriptor::new("query_name", DataKind::String),
        FieldDescriptor::new("query_type", DataKind::UInt16),
        FieldDescriptor::new("query_class", DataKind::UInt16),
        FieldDescriptor::new("error_code", DataKind::UInt8),
        FieldDescriptor::count("error_count"),
        FieldDescriptor::new("answer_type", DataKind::UInt16),
        FieldDescriptor::new("answer_class", DataKind::UInt16),
        FieldDescriptor::nullable("capture_file", DataKind::String),
        FieldDescriptor::nullable("connection_uuid", DataKind::String),
        FieldDescriptor::bytes("traffic_bytes_client", DataKind::UInt64),
        FieldDescriptor::bytes("traffic_bytes_server", DataKind::UInt64),
        FieldDescriptor::count("traffic_packets_client"),
        FieldDescriptor::count("traffic_packets_server"),
    ]);
    fields.extend(server_response_time());
    fields
}
