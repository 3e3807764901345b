//! Date and range label grammars.
//!
//! Hyphenated: `YYYY[-MM[-DD[-HH[-MM[-SS]]]]]`
//! Compact: `YYYY[MM[DD[HH[MM[SS]]]]]`, exactly two digits per field after the year.

use datelabel_core::constants::MAX_PRECISION;

use super::error::{ParseError, ParseErrorKind, ParseResult};

const YEAR_WIDTH: usize = 4;
const FIELD_WIDTH: usize = 2;

/// Splits a date label into its numeric fields, most significant first.
///
/// The number of fields returned is the precision the label carries.
///
/// ## Errors
/// Returns an error if the label is empty, contains non-digit fields, has a
/// compact field of the wrong width, or carries more than six fields.
pub fn parse_date_fields(s: &str) -> ParseResult<Vec<i32>> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyInput, s));
    }

    let fields = if s.contains('-') {
        s.split('-')
            .map(|field| parse_field(field, s))
            .collect::<ParseResult<Vec<_>>>()?
    } else {
        parse_compact(s)?
    };

    if fields.len() > usize::from(MAX_PRECISION) {
        return Err(ParseError::new(ParseErrorKind::TooManyFields, s));
    }

    Ok(fields)
}

fn parse_compact(s: &str) -> ParseResult<Vec<i32>> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(ParseErrorKind::InvalidDigits, s));
    }
    if s.len() < YEAR_WIDTH || (s.len() - YEAR_WIDTH) % FIELD_WIDTH != 0 {
        return Err(ParseError::new(ParseErrorKind::InvalidFieldWidth, s));
    }

    // All ASCII from here, so byte offsets are char boundaries.
    let mut fields = vec![parse_field(&s[..YEAR_WIDTH], s)?];
    for offset in (YEAR_WIDTH..s.len()).step_by(FIELD_WIDTH) {
        fields.push(parse_field(&s[offset..offset + FIELD_WIDTH], s)?);
    }
    Ok(fields)
}

fn parse_field(field: &str, input: &str) -> ParseResult<i32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(ParseErrorKind::InvalidDigits, input));
    }
    field
        .parse::<i32>()
        .map_err(|_e| ParseError::new(ParseErrorKind::InvalidDigits, input))
}

/// Splits a range label `<start>-<end>` on its single hyphen.
///
/// Only compact dates can appear on either side; a hyphenated date would make
/// the split ambiguous.
///
/// ## Errors
/// Returns an error unless the label is exactly two non-empty parts joined by
/// one hyphen.
pub fn split_range(s: &str) -> ParseResult<(&str, &str)> {
    let s = s.trim();
    match s.split_once('-') {
        Some((start, end)) if !start.is_empty() && !end.is_empty() && !end.contains('-') => {
            Ok((start, end))
        }
        _ => Err(ParseError::new(ParseErrorKind::InvalidRangeSyntax, s)),
    }
}
