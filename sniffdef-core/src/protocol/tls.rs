//! TLS session records.

use super::common::{
    data_transfer_time, flow_header, ip_endpoints, ports, server_response_time,
    timing_nullable_count,
};
use crate::schema::{DataKind, FieldDescriptor, Unit};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(ports());
    fields.extend([
        FieldDescriptor::new("application", DataKind::UInt32),
        FieldDescriptor::nullable("protostack", DataKind::String),
        FieldDescriptor::nullable("connection_uuid", DataKind::String),
        FieldDescriptor::nullable("cipher_suite", DataKind::UInt32),
        FieldDescriptor::nullable("client_common_name", DataKind::String),
        FieldDescriptor::nullable("server_common_name", DataKind::String),
        FieldDescriptor::nullable("server_name", DataKind::String),
        FieldDescriptor::nullable("client_not_after", DataKind::UInt64)
            .with_unit(Unit::RelativeSeconds),
        FieldDescriptor::nullable("server_not_after", DataKind::UInt64)
            .with_unit(Unit::RelativeSeconds),
        FieldDescriptor::new("resumed", DataKind::UInt32).with_description("Actually a bool"),
        FieldDescriptor::new("decrypted", DataKind::UInt32).with_description("Actually a bool"),
        FieldDescriptor::new("version", DataKind::UInt32),
        FieldDescriptor::nullable("client_signature", DataKind::String),
        FieldDescriptor::nullable("server_signature", DataKind::String),
        FieldDescriptor::nullable("client_serial_number", DataKind::String),
        FieldDescriptor::nullable("server_serial_number", DataKind::String),
        FieldDescriptor::nullable("client_type", DataKind::UInt32),
        FieldDescriptor::nullable("server_type", DataKind::UInt32),
        FieldDescriptor::nullable("client_bits", DataKind::UInt32),
        FieldDescriptor::nullable("server_bits", DataKind::UInt32),
        FieldDescriptor::new("meta_client", DataKind::UInt32).with_unit(Unit::Pdus),
        FieldDescriptor::new("meta_server", DataKind::UInt32).with_unit(Unit::Pdus),
        FieldDescriptor::new("data_client", DataKind::UInt32),
        FieldDescriptor::new("data_server", DataKind::UInt32),
        FieldDescriptor::new("alert_types", DataKind::UInt32),
        FieldDescriptor::new("alert_errors", DataKind::UInt32),
        FieldDescriptor::bytes("traffic_bytes_client", DataKind::UInt64),
        FieldDescriptor::bytes("traffic_bytes_server", DataKind::UInt64),
        FieldDescriptor::bytes("payload_bytes_client", DataKind::UInt64),
        FieldDescriptor::bytes("payload_bytes_server", DataKind::UInt64),
    ]);
    fields.extend(data_transfer_time());
    fields.extend(server_response_time());
    fields.extend(timing_nullable_count("ct_count", "ct_sum", "ct_square_sum"));
    fields
}
