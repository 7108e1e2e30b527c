//! Primitive field types understood by the downstream engine.

use std::str::FromStr;

/// The fixed set of primitive types a capture field may have.
///
/// These map to Ramen's type names:
/// - unsigned integers: `u8` .. `u128`
/// - `bool`
/// - `string`
///
/// Addresses are not first-class here: IPv4 is carried as `u32`, IPv6 as
/// `string` and MAC addresses as `u64`, exactly as the sniffer writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataKind {
    /// Boolean (true/false)
    Bool,

    /// Unsigned 8-bit integer
    UInt8,

    /// Unsigned 16-bit integer
    UInt16,

    /// Unsigned 32-bit integer (also used for IPv4 addresses)
    UInt32,

    /// Unsigned 64-bit integer (timestamps, MAC addresses, byte sums)
    UInt64,

    /// Unsigned 128-bit integer (sums of squares)
    UInt128,

    /// UTF-8 string
    String,
}

impl DataKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [DataKind; 7] = [
        DataKind::Bool,
        DataKind::UInt8,
        DataKind::UInt16,
        DataKind::UInt32,
        DataKind::UInt64,
        DataKind::UInt128,
        DataKind::String,
    ];

    /// Type name as written in a definition's field list.
    pub const fn type_name(&self) -> &'static str {
        match self {
            DataKind::Bool => "bool",
            DataKind::UInt8 => "u8",
            DataKind::UInt16 => "u16",
            DataKind::UInt32 => "u32",
            DataKind::UInt64 => "u64",
            DataKind::UInt128 => "u128",
            DataKind::String => "string",
        }
    }

    /// Look a kind up by its type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    /// True for the unsigned integer kinds.
    pub const fn is_unsigned_integer(&self) -> bool {
        matches!(
            self,
            DataKind::UInt8
                | DataKind::UInt16
                | DataKind::UInt32
                | DataKind::UInt64
                | DataKind::UInt128
        )
    }
}

impl FromStr for DataKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_type_name(s).ok_or_else(|| s.to_string())
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(DataKind::Bool.type_name(), "bool");
        assert_eq!(DataKind::UInt32.type_name(), "u32");
        assert_eq!(DataKind::UInt128.type_name(), "u128");
        assert_eq!(DataKind::String.type_name(), "string");
    }

    #[test]
    fn test_from_type_name() {
        for kind in DataKind::ALL {
            assert_eq!(DataKind::from_type_name(kind.type_name()), Some(kind));
        }
        assert_eq!(DataKind::from_type_name("i64"), None);
        assert_eq!(DataKind::from_type_name("U32"), None);
        assert_eq!("float".parse::<DataKind>(), Err("float".to_string()));
    }

    #[test]
    fn test_unsigned_integers() {
        assert!(DataKind::UInt8.is_unsigned_integer());
        assert!(DataKind::UInt128.is_unsigned_integer());
        assert!(!DataKind::Bool.is_unsigned_integer());
        assert!(!DataKind::String.is_unsigned_integer());
    }
}
