//! Frequency label grammar: optional quantity, optional `_`/whitespace, unit word.

use std::sync::OnceLock;

use regex::Regex;

use super::error::{ParseError, ParseErrorKind, ParseResult};

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
fn frequency_regex() -> &'static Regex {
    static FREQUENCY_LABEL: OnceLock<Regex> = OnceLock::new();
    FREQUENCY_LABEL.get_or_init(|| {
        Regex::new(r"^(?P<quantity>\d+)[\s_]*(?P<unit>[a-z]+)")
            .expect("Failed to compile frequency label regex")
    })
}

/// Splits a frequency label into a quantity and a lowercase unit token.
///
/// A label without a leading number (`"monthly"`) has quantity 1. Only a
/// prefix has to match, so `"6hr-mean"` reads as `6hr`. The unit token is
/// returned as written; resolving aliases is up to the caller.
///
/// ## Errors
/// Returns an error if the label is empty, the quantity is zero or too large,
/// or the label does not fit the grammar.
pub fn parse_frequency_label(s: &str) -> ParseResult<(u32, String)> {
    let lowered = s.trim().to_lowercase();
    if lowered.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyInput, s));
    }

    if let Some(caps) = frequency_regex().captures(&lowered) {
        let quantity = caps["quantity"]
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidQuantity, s))?;
        return Ok((quantity, caps["unit"].to_string()));
    }

    if lowered.bytes().all(|b| b.is_ascii_lowercase()) {
        return Ok((1, lowered));
    }

    Err(ParseError::new(ParseErrorKind::UnknownUnit, s))
}
