//! SMB command records.

use super::common::{data_transfer_time, flow_header, ip_endpoints, ports, server_response_time};
use crate::schema::{DataKind, FieldDescriptor};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(ports());
    fields.extend([
        FieldDescriptor::new("version", DataKind::UInt32),
        FieldDescriptor::nullable("protostack", DataKind::String),
        FieldDescriptor::nullable("user", DataKind::String),
        FieldDescriptor::nullable("domain", DataKind::String),
        FieldDescriptor::nullable("file_id", DataKind::UInt128),
        FieldDescriptor::nullable("path", DataKind::String),
        FieldDescriptor::nullable("tree_id", DataKind::UInt32),
        FieldDescriptor::nullable("tree", DataKind::String),
        FieldDescriptor::nullable("status", DataKind::UInt32),
        FieldDescriptor::new("command", DataKind::UInt32),
        FieldDescriptor::nullable("subcommand", DataKind::UInt32),
        FieldDescriptor::new("timeouted", DataKind::Bool),
        FieldDescriptor::new("errors", DataKind::UInt32),
        FieldDescriptor::new("warnings", DataKind::UInt32),
        FieldDescriptor::new("queries", DataKind::UInt32),
        FieldDescriptor::nullable("connection_uuid", DataKind::String),
        FieldDescriptor::new("query_begin", DataKind::UInt64),
        FieldDescriptor::new("query_end", DataKind::UInt64),
        FieldDescriptor::bytes("query_payload", DataKind::UInt32),
        FieldDescriptor::new("query_pkts", DataKind::UInt32),
        FieldDescriptor::nullable("resp_begin", DataKind::UInt64),
        FieldDescriptor::nullable("resp_end", DataKind::UInt64),
        FieldDescriptor::bytes("resp_payload", DataKind::UInt32),
        FieldDescriptor::new("resp_pkts", DataKind::UInt32),
        FieldDescriptor::bytes("meta_read_bytes", DataKind::UInt32),
        FieldDescriptor::bytes("meta_write_bytes", DataKind::UInt32),
        FieldDescriptor::bytes("query_write_bytes", DataKind::UInt32),
        FieldDescriptor::bytes("resp_read_bytes", DataKind::UInt32),
        FieldDescriptor::bytes("resp_write_bytes", DataKind::UInt32),
    ]);
    fields.extend(server_response_time());
    fields.extend(data_transfer_time());
    fields.push(FieldDescriptor::new("application", DataKind::UInt32));
    fields
}
