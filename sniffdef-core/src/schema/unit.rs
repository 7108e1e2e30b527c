//! Semantic unit annotations.

/// Unit annotation attached to a field.
///
/// Units are descriptive metadata for the engine's type checker and for
/// humans; they never change how a value is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Dimensionless count, written `{}`
    Dimensionless,
    /// `{bytes}`
    Bytes,
    /// `{microseconds}`
    Microseconds,
    /// `{microseconds^2}`, used by sums of squares
    MicrosecondsSquared,
    /// `{pdus}`
    Pdus,
    /// `{seconds(rel)}`, a duration relative to another timestamp
    RelativeSeconds,
}

impl Unit {
    /// Every supported unit.
    pub const ALL: [Unit; 6] = [
        Unit::Dimensionless,
        Unit::Bytes,
        Unit::Microseconds,
        Unit::MicrosecondsSquared,
        Unit::Pdus,
        Unit::RelativeSeconds,
    ];

    /// Text between the braces.
    pub const fn name(&self) -> &'static str {
        match self {
            Unit::Dimensionless => "",
            Unit::Bytes => "bytes",
            Unit::Microseconds => "microseconds",
            Unit::MicrosecondsSquared => "microseconds^2",
            Unit::Pdus => "pdus",
            Unit::RelativeSeconds => "seconds(rel)",
        }
    }

    /// Parse the text found between braces. Surrounding blanks are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|unit| unit.name() == name)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Unit::Dimensionless.to_string(), "{}");
        assert_eq!(Unit::Bytes.to_string(), "{bytes}");
        assert_eq!(Unit::MicrosecondsSquared.to_string(), "{microseconds^2}");
        assert_eq!(Unit::RelativeSeconds.to_string(), "{seconds(rel)}");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Unit::from_name(""), Some(Unit::Dimensionless));
        assert_eq!(Unit::from_name(" pdus "), Some(Unit::Pdus));
        assert_eq!(Unit::from_name("seconds(rel)"), Some(Unit::RelativeSeconds));
        assert_eq!(Unit::from_name("furlongs"), None);
    }
}
