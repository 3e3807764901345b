//! Label parse error types.

use std::fmt;

/// Result type for label parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a date, range or frequency label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The offending input, as given.
    pub input: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.kind, self.input)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Nothing to parse.
    EmptyInput,
    /// A numeric field contains something other than ASCII digits.
    InvalidDigits,
    /// A compact field is not exactly as wide as required.
    InvalidFieldWidth,
    /// More fields than the finest precision allows.
    TooManyFields,
    /// Fields parse but do not name a real calendar instant.
    InvalidCalendarValue,
    /// A range label is not two dates joined by one hyphen.
    InvalidRangeSyntax,
    /// A frequency quantity is zero or does not fit.
    InvalidQuantity,
    /// A frequency unit is not a known alias.
    UnknownUnit,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::InvalidDigits => write!(f, "invalid digits"),
            Self::InvalidFieldWidth => write!(f, "invalid field width"),
            Self::TooManyFields => write!(f, "too many fields"),
            Self::InvalidCalendarValue => write!(f, "invalid calendar value"),
            Self::InvalidRangeSyntax => write!(f, "invalid range syntax"),
            Self::InvalidQuantity => write!(f, "invalid quantity"),
            Self::UnknownUnit => write!(f, "unknown unit"),
        }
    }
}
