//! Parsers for the accepted label grammars.
//!
//! Parsers only split and validate text; they do not build calendar values.
//! Calendar validation happens when fields are turned into
//! [`PrecisionDate`](crate::time::core::PrecisionDate)s.

mod date;
mod error;
mod frequency;

pub use date::{parse_date_fields, split_range};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use frequency::parse_frequency_label;
