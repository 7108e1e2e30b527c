//! Citrix session records.
//!
//! The sniffer emits two families: one record per virtual channel, and one
//! per session with no channel breakdown (`citrix_chanless`).

use super::common::{
    data_transfer_time, flow_header, ip_endpoints, ports, server_response_time, timing,
};
use crate::schema::{DataKind, FieldDescriptor, Unit};

fn session_identity() -> [FieldDescriptor; 3] {
    [
        FieldDescriptor::new("application", DataKind::UInt32),
        FieldDescriptor::nullable("protostack", DataKind::String),
        FieldDescriptor::nullable("connection_uuid", DataKind::String),
    ]
}

fn user_context() -> [FieldDescriptor; 3] {
    [
        FieldDescriptor::nullable("username", DataKind::String),
        FieldDescriptor::nullable("domain", DataKind::String),
        FieldDescriptor::nullable("citrix_application", DataKind::String),
    ]
}

/// Per-channel records.
pub(super) fn channels_v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(ports());
    fields.extend(session_identity());
    fields.extend([
        FieldDescriptor::nullable("channel_id", DataKind::UInt8),
        FieldDescriptor::nullable("channel", DataKind::UInt8),
        FieldDescriptor::new("pdus_client", DataKind::UInt32).with_unit(Unit::Pdus),
        FieldDescriptor::new("pdus_server", DataKind::UInt32).with_unit(Unit::Pdus),
        FieldDescriptor::new("num_compressed_client", DataKind::UInt32),
        FieldDescriptor::new("num_compressed_server", DataKind::UInt32),
        FieldDescriptor::bytes("payloads_client", DataKind::UInt32),
        FieldDescriptor::bytes("payloads_server", DataKind::UInt32),
    ]);
    fields.extend(server_response_time());
    fields.extend(data_transfer_time());
    fields.extend(user_context());
    fields
}

/// Whole-session records.
pub(super) fn chanless_v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(ip_endpoints());
    fields.extend(ports());
    fields.extend(session_identity());
    fields.extend([
        FieldDescriptor::nullable("module_name", DataKind::String),
        FieldDescriptor::new("encrypt_type", DataKind::UInt8),
        FieldDescriptor::new("pdus_client", DataKind::UInt32),
        FieldDescriptor::new("pdus_server", DataKind::UInt32),
        FieldDescriptor::new("pdus_cgp_client", DataKind::UInt32),
        FieldDescriptor::new("pdus_cgp_server", DataKind::UInt32),
        FieldDescriptor::new("num_keep_alives_client", DataKind::UInt32),
        FieldDescriptor::new("num_keep_alives_server", DataKind::UInt32),
        FieldDescriptor::bytes("payloads_client", DataKind::UInt32),
        FieldDescriptor::bytes("payloads_server", DataKind::UInt32),
    ]);
    fields.extend(server_response_time());
    fields.extend(data_transfer_time());
    fields.extend(timing(
        "login_time_count",
        "login_time_sum",
        "login_time_square_sum",
    ));
    fields.extend(timing(
        "launch_time_count",
        "launch_time_sum",
        "launch_time_square_sum",
    ));
    fields.extend([
        FieldDescriptor::count("num_aborts"),
        FieldDescriptor::count("num_timeouts"),
    ]);
    fields.extend(user_context());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdus_units_differ_between_families() {
        let channels = channels_v30();
        let chanless = chanless_v30();
        assert_eq!(channels.len(), 42);
        assert_eq!(chanless.len(), 52);

        let pdus = |fields: &[FieldDescriptor]| {
            fields
                .iter()
                .find(|f| f.name() == "pdus_client")
                .and_then(|f| f.unit)
        };
        assert_eq!(pdus(&channels), Some(Unit::Pdus));
        assert_eq!(pdus(&chanless), None);
    }
}
