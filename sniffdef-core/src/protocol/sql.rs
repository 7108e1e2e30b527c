//! Database query records (MySQL, PostgreSQL, TNS, TDS).

use super::common::{data_transfer_time, flow_header, ip_endpoints, ports, server_response_time};
use crate::schema::{DataKind, FieldDescriptor};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(ports());
    fields.extend([
        FieldDescriptor::new("query", DataKind::String),
        FieldDescriptor::new("timeouted", DataKind::Bool),
        FieldDescriptor::nullable("protostack", DataKind::String),
        FieldDescriptor::nullable("user", DataKind::String),
        FieldDescriptor::nullable("dbname", DataKind::String),
        FieldDescriptor::nullable("error_sql_status", DataKind::String),
        FieldDescriptor::nullable("error_code", DataKind::String),
        FieldDescriptor::nullable("error_msg", DataKind::String),
        FieldDescriptor::new("is_error", DataKind::Bool),
        FieldDescriptor::new("_hardcoded_one_facepalm", DataKind::Bool)
            .with_description("Always true"),
        FieldDescriptor::nullable("command", DataKind::UInt32),
        FieldDescriptor::nullable("connection_uuid", DataKind::String),
        FieldDescriptor::new("query_begin", DataKind::UInt64),
        FieldDescriptor::new("query_end", DataKind::UInt64),
        FieldDescriptor::bytes("query_payload", DataKind::UInt32),
        FieldDescriptor::new("query_pkts", DataKind::UInt32),
        FieldDescriptor::nullable("resp_begin", DataKind::UInt64),
        FieldDescriptor::nullable("resp_end", DataKind::UInt64),
        FieldDescriptor::bytes("resp_payload", DataKind::UInt32),
        FieldDescriptor::new("resp_pkts", DataKind::UInt32),
    ]);
    fields.extend(server_response_time());
    fields.extend(data_transfer_time());
    fields.push(FieldDescriptor::new("application", DataKind::UInt32));
    fields
}
