//! HTTP request/response records.

use super::common::{flow_header, ip_endpoints, ports, server_response_time};
use crate::schema::{DataKind, FieldDescriptor, Unit};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(ports());
    fields.extend([
        FieldDescriptor::nullable("connection_uuid", DataKind::String),
        FieldDescriptor::new("id", DataKind::String),
        FieldDescriptor::new("parent_id", DataKind::String),
        FieldDescriptor::nullable("referrer_id", DataKind::String),
        FieldDescriptor::new("deep_inspect", DataKind::Bool),
        FieldDescriptor::new("contributed", DataKind::Bool),
        FieldDescriptor::new("timeouted", DataKind::Bool),
        FieldDescriptor::nullable("host", DataKind::String),
        FieldDescriptor::nullable("user_agent", DataKind::String),
        FieldDescriptor::new("url", DataKind::String),
        FieldDescriptor::nullable("server", DataKind::String),
        FieldDescriptor::new("compressed", DataKind::Bool),
        FieldDescriptor::new("chunked_encoding", DataKind::Bool),
        FieldDescriptor::new("ajax", DataKind::Bool),
        FieldDescriptor::ipv4_field("ip4_orig_client"),
        FieldDescriptor::ipv6_field("ip6_orig_client"),
        FieldDescriptor::count("page_count").with_description("0 or 1 iff a page"),
        FieldDescriptor::new("_hardcoded_one_facepalm", DataKind::Bool)
            .with_description("Always true"),
    ]);
    fields.extend([
        FieldDescriptor::micros_sum("query_begin"),
        FieldDescriptor::micros_sum("query_end"),
        FieldDescriptor::new("query_method", DataKind::UInt8),
        FieldDescriptor::bytes("query_headers", DataKind::UInt32),
        FieldDescriptor::bytes("query_payload", DataKind::UInt32),
        FieldDescriptor::new("query_pkts", DataKind::UInt32),
        FieldDescriptor::nullable("query_content", DataKind::String),
        FieldDescriptor::bytes("query_content_length", DataKind::UInt32).set_nullable(true),
        FieldDescriptor::count("query_content_length_count"),
        FieldDescriptor::nullable("query_mime_type", DataKind::String),
        FieldDescriptor::micros_sum("resp_begin").set_nullable(true),
        FieldDescriptor::micros_sum("resp_end").set_nullable(true),
        FieldDescriptor::nullable("resp_code", DataKind::UInt32),
        FieldDescriptor::bytes("resp_headers", DataKind::UInt32),
        FieldDescriptor::bytes("resp_payload", DataKind::UInt32),
        FieldDescriptor::new("resp_pkts", DataKind::UInt32),
        FieldDescriptor::nullable("resp_content", DataKind::String),
        FieldDescriptor::bytes("resp_content_length", DataKind::UInt32).set_nullable(true),
        FieldDescriptor::count("resp_content_length_count"),
        FieldDescriptor::nullable("resp_mime_type", DataKind::String),
    ]);
    fields.extend([
        FieldDescriptor::bytes("tot_volume_query", DataKind::UInt32).set_nullable(true),
        FieldDescriptor::bytes("tot_volume_response", DataKind::UInt32).set_nullable(true),
        FieldDescriptor::count("tot_count").with_description("Page hit count"),
        FieldDescriptor::new("tot_errors", DataKind::UInt16).with_unit(Unit::Dimensionless),
        FieldDescriptor::new("tot_timeouts", DataKind::UInt16).with_unit(Unit::Dimensionless),
        FieldDescriptor::micros_sum("tot_begin"),
        FieldDescriptor::micros_sum("tot_end"),
        FieldDescriptor::micros_sum("tot_load_time"),
        FieldDescriptor::micros_square_sum("tot_load_time_squared"),
    ]);
    fields.extend(server_response_time());
    // HTTP records carry transfer-time sums without their counts.
    fields.extend([
        FieldDescriptor::micros_sum("dtt_sum_client"),
        FieldDescriptor::micros_square_sum("dtt_square_sum_client"),
        FieldDescriptor::micros_sum("dtt_sum_server"),
        FieldDescriptor::micros_square_sum("dtt_square_sum_server"),
        FieldDescriptor::new("application", DataKind::UInt32),
    ]);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v30_layout() {
        let fields = v30();
        assert_eq!(fields.len(), 74);
        assert_eq!(fields.last().map(|f| f.name()), Some("application"));
    }
}
