//! Field descriptor for capture record layouts.

use std::borrow::Cow;

use super::{DataKind, Unit};

/// One column of a capture record.
///
/// Built-in layouts use borrowed `'static` names; layouts parsed from
/// external content own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field name (snake_case, e.g., "port_client")
    pub name: Cow<'static, str>,

    /// Data type
    pub kind: DataKind,

    /// Whether the field can be NULL (rendered as a trailing `?`)
    pub nullable: bool,

    /// Optional unit annotation
    pub unit: Option<Unit>,

    /// Optional description for documentation, never emitted
    pub description: Option<&'static str>,
}

impl FieldDescriptor {
    /// Create a new non-nullable field.
    pub const fn new(name: &'static str, kind: DataKind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
            nullable: false,
            unit: None,
            description: None,
        }
    }

    /// Create a new nullable field.
    pub const fn nullable(name: &'static str, kind: DataKind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
            nullable: true,
            unit: None,
            description: None,
        }
    }

    /// Create a field with a runtime name.
    pub fn owned(name: impl Into<String>, kind: DataKind) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            kind,
            nullable: false,
            unit: None,
            description: None,
        }
    }

    /// Attach a unit annotation.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Add a description to the field.
    pub fn with_description(mut self, desc: &'static str) -> Self {
        self.description = Some(desc);
        self
    }

    /// Builder: set nullability.
    pub fn set_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Field name as a plain `&str`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Shorthands for the field shapes the sniffer repeats in every record.
impl FieldDescriptor {
    /// Dimensionless `u32` counter.
    pub fn count(name: &'static str) -> Self {
        Self::new(name, DataKind::UInt32).with_unit(Unit::Dimensionless)
    }

    /// Byte volume of the given width.
    pub fn bytes(name: &'static str, kind: DataKind) -> Self {
        Self::new(name, kind).with_unit(Unit::Bytes)
    }

    /// `u64` sum of microsecond durations.
    pub fn micros_sum(name: &'static str) -> Self {
        Self::new(name, DataKind::UInt64).with_unit(Unit::Microseconds)
    }

    /// `u128` sum of squared microsecond durations.
    pub fn micros_square_sum(name: &'static str) -> Self {
        Self::new(name, DataKind::UInt128).with_unit(Unit::MicrosecondsSquared)
    }

    /// Capture timestamp in microseconds since the epoch.
    pub fn capture_timestamp(name: &'static str) -> Self {
        Self::new(name, DataKind::UInt64)
    }

    /// IPv4 address field (stored as UInt32).
    pub fn ipv4_field(name: &'static str) -> Self {
        Self::nullable(name, DataKind::UInt32)
    }

    /// IPv6 address field (stored as its textual form).
    pub fn ipv6_field(name: &'static str) -> Self {
        Self::nullable(name, DataKind::String)
    }

    /// MAC address field (stored as UInt64).
    pub fn mac_field(name: &'static str) -> Self {
        Self::nullable(name, DataKind::UInt64)
    }
}

impl std::fmt::Display for FieldDescriptor {
    /// Renders the field the way a definition's field list spells it,
    /// e.g. `mtu_client u32? {bytes}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.kind)?;
        if self.nullable {
            f.write_str("?")?;
        }
        if let Some(unit) = self.unit {
            write!(f, " {unit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field = FieldDescriptor::new("test", DataKind::UInt32);
        assert_eq!(field.name(), "test");
        assert_eq!(field.kind, DataKind::UInt32);
        assert!(!field.nullable);
        assert!(field.unit.is_none());
        assert!(field.description.is_none());
    }

    #[test]
    fn test_nullable_field() {
        let field = FieldDescriptor::nullable("optional", DataKind::String);
        assert!(field.nullable);
    }

    #[test]
    fn test_builder_pattern() {
        let field = FieldDescriptor::new("resumed", DataKind::UInt32)
            .set_nullable(true)
            .with_unit(Unit::Dimensionless)
            .with_description("Actually a bool");

        assert!(field.nullable);
        assert_eq!(field.unit, Some(Unit::Dimensionless));
        assert_eq!(field.description, Some("Actually a bool"));
    }

    #[test]
    fn test_owned_equals_borrowed() {
        let owned = FieldDescriptor::owned(String::from("poller"), DataKind::String);
        assert_eq!(owned, FieldDescriptor::new("poller", DataKind::String));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FieldDescriptor::new("poller", DataKind::String).to_string(),
            "poller string"
        );
        assert_eq!(
            FieldDescriptor::nullable("mtu_client", DataKind::UInt32)
                .with_unit(Unit::Bytes)
                .to_string(),
            "mtu_client u32? {bytes}"
        );
        assert_eq!(
            FieldDescriptor::count("rt_count_server").to_string(),
            "rt_count_server u32 {}"
        );
    }

    #[test]
    fn test_common_fields() {
        let mac = FieldDescriptor::mac_field("mac_client");
        assert_eq!(mac.kind, DataKind::UInt64);
        assert!(mac.nullable);

        let sq = FieldDescriptor::micros_square_sum("rt_square_sum_server");
        assert_eq!(sq.kind, DataKind::UInt128);
        assert_eq!(sq.unit, Some(Unit::MicrosecondsSquared));
    }
}
