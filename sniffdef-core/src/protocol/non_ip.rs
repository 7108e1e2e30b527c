//! Records for non-IP ethernet traffic.

use super::common::{flow_header, mtu, traffic};
use crate::schema::{DataKind, FieldDescriptor};

pub(super) fn v30() -> Vec<FieldDescriptor> {
    let mut fields = flow_header();
    fields.extend(mtu());
    fields.extend([
        FieldDescriptor::new("eth_type", DataKind::UInt16),
        FieldDescriptor::new("application", DataKind::UInt32),
        FieldDescriptor::nullable("protostack", DataKind::String),
    ]);
    fields.extend(traffic());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ip_addresses() {
        let fields = v30();
        assert_eq!(fields.len(), 22);
        assert!(fields.iter().all(|f| !f.name().starts_with("ip")));
    }
}
