//! Closed ranges of precision dates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::date::{Comparand, PrecisionDate};
use super::precision::Precision;
use crate::error::{TimeError, TimeResult};
use crate::time::parse::{ParseError, ParseErrorKind, split_range};

/// A closed interval of dates, e.g. `1990-1999` runs from 00:00 on
/// 1 January 1990 through the end of 31 December 1999.
///
/// Both endpoints share one precision. Construction from endpoints of mixed
/// precision lowers both to the coarser of the two.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateRange {
    start: PrecisionDate,
    /// Inclusive upper bound: just before the interval after `nominal_end`.
    end: PrecisionDate,
    /// The end as labelled, at the start of its interval.
    nominal_end: PrecisionDate,
}

/// The input shapes a [`DateRange`] can be built from.
#[derive(Debug, Clone)]
pub enum RangeInput<'a> {
    /// A `"<start>-<end>"` label.
    Text(&'a str),
    /// Two date labels.
    Labels(&'a str, &'a str),
    /// Explicit endpoints.
    Pair(PrecisionDate, PrecisionDate),
    /// The smallest range spanning all dates.
    Dates(Vec<PrecisionDate>),
    /// Contiguous, non-overlapping ranges to merge.
    Ranges(Vec<DateRange>),
}

impl DateRange {
    /// ## Summary
    /// Builds a range from its start and nominal (labelled) end.
    ///
    /// If the precisions differ, both endpoints are lowered to the coarser one
    /// and snapped to the start of their intervals.
    ///
    /// ## Errors
    /// Returns `TimeError::InvalidRange` unless the start is strictly before
    /// the normalized end.
    pub fn new(start: PrecisionDate, end: PrecisionDate) -> TimeResult<Self> {
        let (start, nominal_end) = Self::coerce(start, end);
        if !start.is_before(nominal_end) {
            return Err(TimeError::InvalidRange {
                start: start.to_string(),
                end: nominal_end.to_string(),
            });
        }
        Self::from_bounds(start, nominal_end)
    }

    /// Lowers both endpoints to their coarser precision.
    fn coerce(start: PrecisionDate, end: PrecisionDate) -> (PrecisionDate, PrecisionDate) {
        let precision = start.precision().coarser(end.precision());
        if start.precision() != end.precision() {
            tracing::debug!(
                start = %start,
                end = %end,
                precision = %precision,
                "Coercing range endpoints to coarser precision"
            );
        }
        (start.coarsen(precision), end.coarsen(precision))
    }

    /// Expects coerced endpoints with `start` at or before `nominal_end`.
    fn from_bounds(start: PrecisionDate, nominal_end: PrecisionDate) -> TimeResult<Self> {
        Ok(Self {
            start,
            end: nominal_end.interval_end()?,
            nominal_end,
        })
    }

    /// ## Summary
    /// Parses a `"<start>-<end>"` label, splitting on its single hyphen.
    ///
    /// ## Errors
    /// Returns `TimeError::MalformedInput` if the label is not two date labels
    /// joined by one hyphen, or `TimeError::InvalidRange` if the dates do not
    /// form a range.
    pub fn parse(s: &str) -> TimeResult<Self> {
        let (start, end) = split_range(s).inspect_err(|e| {
            tracing::debug!(label = s, error = %e, "Rejected range label");
        })?;
        Self::from_labels(start, end)
    }

    /// ## Summary
    /// Builds a range from two date labels.
    ///
    /// ## Errors
    /// Returns an error if either label is malformed or the dates do not form a range.
    pub fn from_labels(start: &str, end: &str) -> TimeResult<Self> {
        Self::new(PrecisionDate::parse(start)?, PrecisionDate::parse(end)?)
    }

    /// ## Summary
    /// The smallest range spanning all given dates.
    ///
    /// ## Errors
    /// Returns `TimeError::MalformedInput` if there are no dates, or
    /// `TimeError::InvalidRange` if the earliest and latest dates coincide.
    pub fn from_dates(dates: impl IntoIterator<Item = PrecisionDate>) -> TimeResult<Self> {
        let dates: Vec<_> = dates.into_iter().collect();
        let first = dates.iter().min_by(|a, b| a.compare(*b));
        let last = dates.iter().max_by(|a, b| a.compare(*b));

        match (first, last) {
            (Some(first), Some(last)) => Self::new(*first, *last),
            _ => Err(ParseError::new(ParseErrorKind::EmptyInput, "no dates").into()),
        }
    }

    /// ## Summary
    /// Merges ranges that tile a span with no gaps or overlaps.
    ///
    /// Ranges are sorted by start; each range's nominal end, stepped forward
    /// one unit, must equal the next range's start (and the next start,
    /// stepped back, the nominal end), at equal precision.
    ///
    /// ## Errors
    /// Returns `TimeError::NonContiguousRanges` naming the first offending
    /// pair, or `TimeError::MalformedInput` if there are no ranges.
    pub fn from_ranges(ranges: impl IntoIterator<Item = DateRange>) -> TimeResult<Self> {
        let mut ranges: Vec<_> = ranges.into_iter().collect();
        ranges.sort_by(|a, b| a.start.compare(b.start));

        for pair in ranges.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            let contiguous = previous.nominal_end.increment()? == next.start
                && next.start.decrement()? == previous.nominal_end;
            if !contiguous {
                tracing::debug!(
                    previous = %previous,
                    next = %next,
                    "Rejected non-contiguous ranges"
                );
                return Err(TimeError::NonContiguousRanges {
                    previous: previous.to_string(),
                    next: next.to_string(),
                });
            }
        }

        match (ranges.first(), ranges.last()) {
            (Some(first), Some(last)) => {
                tracing::debug!(count = ranges.len(), "Merging contiguous ranges");
                Self::new(first.start, last.nominal_end)
            }
            _ => Err(ParseError::new(ParseErrorKind::EmptyInput, "no ranges").into()),
        }
    }

    /// ## Summary
    /// Builds a range from any supported input shape.
    ///
    /// ## Errors
    /// Returns the error of the constructor matching the input shape.
    pub fn from_input(input: RangeInput<'_>) -> TimeResult<Self> {
        match input {
            RangeInput::Text(s) => Self::parse(s),
            RangeInput::Labels(start, end) => Self::from_labels(start, end),
            RangeInput::Pair(start, end) => Self::new(start, end),
            RangeInput::Dates(dates) => Self::from_dates(dates),
            RangeInput::Ranges(ranges) => Self::from_ranges(ranges),
        }
    }

    #[must_use]
    pub const fn start(&self) -> PrecisionDate {
        self.start
    }

    /// Inclusive upper bound used for containment and overlap.
    #[must_use]
    pub const fn end(&self) -> PrecisionDate {
        self.end
    }

    /// The end as labelled, at the same precision as the start.
    #[must_use]
    pub const fn nominal_end(&self) -> PrecisionDate {
        self.nominal_end
    }

    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.start.precision()
    }

    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// ## Summary
    /// True if the two ranges share any instant.
    #[must_use]
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start.is_at_or_before(other.end) && other.start.is_at_or_before(self.end)
    }

    /// ## Summary
    /// True if `item` falls within the range, endpoints included.
    #[must_use]
    pub fn overlaps_point(&self, item: impl Into<Comparand>) -> bool {
        let item = item.into();
        self.start.is_at_or_before(item) && self.end.is_at_or_after(item)
    }

    /// ## Summary
    /// True if `other` lies entirely within this range.
    #[must_use]
    pub fn contains(&self, other: &DateRange) -> bool {
        self.start.is_at_or_before(other.start) && self.end.is_at_or_after(other.end)
    }

    /// ## Summary
    /// True if `item` falls within the range. Same test as [`Self::overlaps_point`].
    #[must_use]
    pub fn contains_point(&self, item: impl Into<Comparand>) -> bool {
        self.overlaps_point(item)
    }

    /// ## Summary
    /// The range covered by both `self` and `other`.
    ///
    /// ## Errors
    /// Returns `TimeError::EmptyIntersection` if the ranges do not overlap.
    /// Ranges sharing a single unit intersect in that unit, e.g. `2010-2010`.
    pub fn intersection(&self, other: &DateRange) -> TimeResult<Self> {
        if !self.overlaps(other) {
            return Err(TimeError::EmptyIntersection {
                left: self.to_string(),
                right: other.to_string(),
            });
        }

        let start = if self.start.is_before(other.start) {
            other.start
        } else {
            self.start
        };
        let end = if self.nominal_end.is_after(other.nominal_end) {
            other.nominal_end
        } else {
            self.nominal_end
        };

        let (start, nominal_end) = Self::coerce(start, end);
        if start.is_after(nominal_end) {
            return Err(TimeError::EmptyIntersection {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Self::from_bounds(start, nominal_end)
    }
}

impl PartialEq for DateRange {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for DateRange {}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.nominal_end)
    }
}

impl FromStr for DateRange {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateRange {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateRange> for String {
    fn from(range: DateRange) -> Self {
        range.to_string()
    }
}
