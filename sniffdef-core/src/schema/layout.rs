//! Textual field-layout parser.
//!
//! External layout files use the same notation a definition's field list
//! does:
//!
//! ```text
//! (poller string,                     -- 1
//!  capture_begin u64,
//!  capture_end u64,
//!  mtu_client u32? {bytes},
//!  rt_square_sum_server u128 {microseconds^2})
//! ```
//!
//! The surrounding parentheses are optional and `--` starts a comment that
//! runs to the end of the line. Only structure is checked here; the
//! registry runs [`validate_fields`](super::validate_fields) afterwards.
//!
//! Grammar:
//! ```text
//! layout      = "(" fields ")" | fields
//! fields      = [declaration ("," declaration)*]
//! declaration = name type ["?"] [unit]
//! unit        = "{" text "}"
//! ```

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_while1},
    character::complete::{char, multispace1, not_line_ending, space0, space1},
    combinator::{all_consuming, cut, map, opt, recognize, value},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

use super::{DataKind, FieldDescriptor, Unit};
use crate::error::ValidationError;

/// A declaration as written, before its type and unit are looked up.
struct RawField<'a> {
    name: &'a str,
    type_name: &'a str,
    nullable: bool,
    unit: Option<&'a str>,
}

/// Parse layout text into ordered field descriptors.
pub fn parse_layout(text: &str) -> Result<Vec<FieldDescriptor>, ValidationError> {
    let raw = match all_consuming(layout)(text) {
        Ok((_, raw)) => raw,
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => return Err(syntax_error(text, e.input)),
        Err(nom::Err::Incomplete(_)) => return Err(syntax_error(text, "")),
    };

    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }

    raw.into_iter().map(RawField::into_descriptor).collect()
}

/// Locate the unparsed remainder in `text` and describe it.
fn syntax_error(text: &str, rest: &str) -> ValidationError {
    let consumed = &text[..text.len() - rest.len()];
    let line = consumed.matches('\n').count() + 1;

    let found = rest.lines().next().map(str::trim).unwrap_or("");
    let reason = if rest.is_empty() {
        "unexpected end of layout".to_string()
    } else if found.is_empty() {
        "unexpected end of line".to_string()
    } else {
        format!("unexpected '{found}'")
    };

    ValidationError::Syntax { line, reason }
}

impl RawField<'_> {
    fn into_descriptor(self) -> Result<FieldDescriptor, ValidationError> {
        let kind = DataKind::from_type_name(self.type_name).ok_or_else(|| {
            ValidationError::UnknownType {
                field: self.name.to_string(),
                type_name: self.type_name.to_string(),
            }
        })?;

        let mut field = FieldDescriptor::owned(self.name, kind).set_nullable(self.nullable);

        if let Some(unit_text) = self.unit {
            let unit = Unit::from_name(unit_text).ok_or_else(|| ValidationError::UnknownUnit {
                field: self.name.to_string(),
                unit: unit_text.trim().to_string(),
            })?;
            field = field.with_unit(unit);
        }

        Ok(field)
    }
}

// =============================================================================
// Layout structure
// =============================================================================

fn layout(input: &str) -> IResult<&str, Vec<RawField<'_>>> {
    delimited(blank, alt((parenthesised, fields)), blank)(input)
}

/// Once `(` is seen the closing `)` is mandatory.
fn parenthesised(input: &str) -> IResult<&str, Vec<RawField<'_>>> {
    preceded(
        char('('),
        cut(terminated(delimited(blank, fields, blank), char(')'))),
    )(input)
}

/// Comma-separated declarations; a comma must be followed by a declaration.
fn fields(input: &str) -> IResult<&str, Vec<RawField<'_>>> {
    if identifier(input).is_err() {
        return Ok((input, Vec::new()));
    }

    let (input, first) = cut(declaration)(input)?;
    let (input, rest) = many0(preceded(
        delimited(blank, char(','), blank),
        cut(declaration),
    ))(input)?;

    let mut list = Vec::with_capacity(rest.len() + 1);
    list.push(first);
    list.extend(rest);
    Ok((input, list))
}

/// Whitespace, newlines and `--` comments.
fn blank(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((multispace1, comment))))(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(tag("--"), not_line_ending))(input)
}

// =============================================================================
// Declarations
// =============================================================================

/// `name type[?] [{unit}]`, all on one line.
fn declaration(input: &str) -> IResult<&str, RawField<'_>> {
    let (input, name) = identifier(input)?;
    let (input, _) = space1(input)?;
    let (input, type_name) = identifier(input)?;
    let (input, nullable) = map(opt(char('?')), |mark| mark.is_some())(input)?;
    let (input, unit) = opt(preceded(space0, unit))(input)?;

    Ok((
        input,
        RawField {
            name,
            type_name,
            nullable,
            unit,
        },
    ))
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

/// Unit annotation body; `{}` is the dimensionless unit.
fn unit(input: &str) -> IResult<&str, &str> {
    preceded(
        char('{'),
        cut(terminated(take_till(|c: char| c == '}' || c == '\n'), char('}'))),
    )(input)
}
