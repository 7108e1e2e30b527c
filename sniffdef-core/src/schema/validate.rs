//! Load-time layout validation.

use std::collections::HashMap;

use super::FieldDescriptor;
use crate::emit::is_plain_identifier;
use crate::error::ValidationError;

/// Capture start, microseconds since the epoch.
pub const CAPTURE_BEGIN: &str = "capture_begin";

/// Capture end, microseconds since the epoch.
pub const CAPTURE_END: &str = "capture_end";

/// Check a field layout before it is admitted to the registry.
///
/// Types need no check here: [`DataKind`](super::DataKind) only has the
/// fixed primitive set, and the text parser rejects anything else.
pub fn validate_fields(fields: &[FieldDescriptor]) -> Result<(), ValidationError> {
    if fields.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(fields.len());
    for (idx, field) in fields.iter().enumerate() {
        if !is_plain_identifier(field.name()) {
            return Err(ValidationError::InvalidFieldName {
                name: field.name().to_string(),
            });
        }
        if let Some(first) = seen.insert(field.name(), idx) {
            return Err(ValidationError::DuplicateField {
                name: field.name().to_string(),
                first: first + 1,
                second: idx + 1,
            });
        }
    }

    for required in [CAPTURE_BEGIN, CAPTURE_END] {
        let field = fields
            .iter()
            .find(|f| f.name() == required)
            .ok_or(ValidationError::MissingTimestamp { field: required })?;
        if field.nullable || !field.kind.is_unsigned_integer() {
            return Err(ValidationError::InvalidTimestamp {
                field: required,
                found: format!("{}{}", field.kind, if field.nullable { "?" } else { "" }),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DataKind;

    fn base() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("poller", DataKind::String),
            FieldDescriptor::capture_timestamp(CAPTURE_BEGIN),
            FieldDescriptor::capture_timestamp(CAPTURE_END),
        ]
    }

    #[test]
    fn test_valid_layout() {
        assert_eq!(validate_fields(&base()), Ok(()));
    }

    #[test]
    fn test_empty_layout() {
        assert_eq!(validate_fields(&[]), Err(ValidationError::Empty));
    }

    #[test]
    fn test_missing_timestamps() {
        let mut fields = base();
        fields.remove(1);
        assert_eq!(
            validate_fields(&fields),
            Err(ValidationError::MissingTimestamp {
                field: CAPTURE_BEGIN
            })
        );

        let mut fields = base();
        fields.remove(2);
        assert_eq!(
            validate_fields(&fields),
            Err(ValidationError::MissingTimestamp { field: CAPTURE_END })
        );
    }

    #[test]
    fn test_timestamp_shape() {
        let mut fields = base();
        fields[2] = FieldDescriptor::nullable(CAPTURE_END, DataKind::UInt64);
        assert_eq!(
            validate_fields(&fields),
            Err(ValidationError::InvalidTimestamp {
                field: CAPTURE_END,
                found: "u64?".to_string()
            })
        );

        let mut fields = base();
        fields[1] = FieldDescriptor::new(CAPTURE_BEGIN, DataKind::String);
        assert!(matches!(
            validate_fields(&fields),
            Err(ValidationError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_duplicate_names() {
        let mut fields = base();
        fields.push(FieldDescriptor::new("poller", DataKind::UInt8));
        assert_eq!(
            validate_fields(&fields),
            Err(ValidationError::DuplicateField {
                name: "poller".to_string(),
                first: 1,
                second: 4
            })
        );
    }

    #[test]
    fn test_invalid_names() {
        let mut fields = base();
        fields.push(FieldDescriptor::new("bad-name", DataKind::UInt8));
        assert!(matches!(
            validate_fields(&fields),
            Err(ValidationError::InvalidFieldName { .. })
        ));

        let mut fields = base();
        fields.push(FieldDescriptor::new("9lives", DataKind::UInt8));
        assert!(validate_fields(&fields).is_err());
    }
}
