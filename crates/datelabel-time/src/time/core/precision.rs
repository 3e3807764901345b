//! Date precision levels.

use std::fmt;

use crate::time::parse::{ParseError, ParseErrorKind, ParseResult};

/// The finest calendar field a date label is resolved to.
///
/// Variants are ordered from coarsest to finest, so `min` of two precisions is
/// the coarser one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    Year = 1,
    Month = 2,
    Day = 3,
    Hour = 4,
    Minute = 5,
    Second = 6,
}

impl Precision {
    pub const ALL: [Self; 6] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// Returns the precision carried by a label with `count` numeric fields.
    ///
    /// ## Errors
    /// Returns an error unless `count` is in `1..=6`.
    pub fn from_field_count(count: usize) -> ParseResult<Self> {
        count
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| {
                let kind = if count == 0 {
                    ParseErrorKind::EmptyInput
                } else {
                    ParseErrorKind::TooManyFields
                };
                ParseError::new(kind, format!("{count} fields"))
            })
    }

    /// Number of leading calendar fields (year, month, ...) this precision fixes.
    #[must_use]
    pub const fn field_count(self) -> usize {
        self as usize
    }

    /// The coarser of two precisions.
    #[must_use]
    pub fn coarser(self, other: Self) -> Self {
        self.min(other)
    }

    /// `strftime` pattern for the canonical label at this precision.
    #[must_use]
    pub const fn label_format(self) -> &'static str {
        match self {
            Self::Year => "%Y",
            Self::Month => "%Y%m",
            Self::Day => "%Y%m%d",
            Self::Hour => "%Y%m%d%H",
            Self::Minute => "%Y%m%d%H%M",
            Self::Second => "%Y%m%d%H%M%S",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
