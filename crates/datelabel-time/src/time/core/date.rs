//! Dates of variable precision.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use datelabel_core::constants::INTERVAL_END_EPSILON_MS;

use super::precision::Precision;
use crate::error::{TimeError, TimeResult};
use crate::time::parse::{ParseError, ParseErrorKind, parse_date_fields};

/// A date known only to a given precision.
///
/// The instant is the *start* of the interval implied by the precision, so
/// `PrecisionDate::parse("2000-05")` sits at 00:00 on 1 May 2000. The one
/// exception is a range's inclusive upper bound, see [`Self::interval_end`].
///
/// Ordering and equality follow different rules:
/// - ordering ([`Self::compare`]) is plain chronological order of instants;
/// - equality ([`Self::matches`], `==`) compares only the leading calendar
///   fields fixed by the precision, and between two `PrecisionDate`s also
///   requires the precisions to agree.
///
/// Because the two disagree, `PartialOrd` is deliberately not implemented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrecisionDate {
    instant: NaiveDateTime,
    precision: Precision,
}

/// Anything a [`PrecisionDate`] can be compared against.
#[derive(Debug, Clone, Copy)]
pub enum Comparand {
    /// Another precision-tagged date.
    Date(PrecisionDate),
    /// A full timestamp; equality truncates it to the date's precision.
    Timestamp(NaiveDateTime),
    /// A calendar day; both ordering and equality use the date's calendar day.
    Day(NaiveDate),
}

impl From<PrecisionDate> for Comparand {
    fn from(date: PrecisionDate) -> Self {
        Self::Date(date)
    }
}

impl From<&PrecisionDate> for Comparand {
    fn from(date: &PrecisionDate) -> Self {
        Self::Date(*date)
    }
}

impl From<NaiveDateTime> for Comparand {
    fn from(timestamp: NaiveDateTime) -> Self {
        Self::Timestamp(timestamp)
    }
}

impl From<NaiveDate> for Comparand {
    fn from(day: NaiveDate) -> Self {
        Self::Day(day)
    }
}

impl PrecisionDate {
    /// ## Summary
    /// Parses a `YYYY-MM-DD...` or compact `YYYYMMDDHH...` label.
    ///
    /// The precision is the number of fields in the label.
    ///
    /// ## Errors
    /// Returns `TimeError::MalformedInput` if the label does not fit either
    /// grammar, has more than six fields, or names no real instant.
    pub fn parse(s: &str) -> TimeResult<Self> {
        let fields = parse_date_fields(s).inspect_err(|e| {
            tracing::debug!(label = s, error = %e, "Rejected date label");
        })?;
        let date = Self::build(&fields, s)?;
        tracing::trace!(label = s, precision = %date.precision, "Parsed date label");
        Ok(date)
    }

    /// ## Summary
    /// Builds a date from 1 to 6 numeric fields (year, month, day, hour,
    /// minute, second). Missing finer fields take their minimum value.
    ///
    /// ## Errors
    /// Returns `TimeError::MalformedInput` if there are no fields, more than
    /// six, or the fields name no real instant.
    pub fn from_fields(fields: &[i32]) -> TimeResult<Self> {
        let label = fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-");
        Self::build(fields, &label)
    }

    fn build(fields: &[i32], label: &str) -> TimeResult<Self> {
        let precision = Precision::from_field_count(fields.len())
            .map_err(|e| ParseError::new(e.kind, label))?;

        let invalid = || ParseError::new(ParseErrorKind::InvalidCalendarValue, label);
        let field = |i: usize, default: u32| -> Result<u32, ParseError> {
            fields
                .get(i)
                .map_or(Ok(default), |v| u32::try_from(*v).map_err(|_e| invalid()))
        };

        let (month, day) = (field(1, 1)?, field(2, 1)?);
        let (hour, minute, second) = (field(3, 0)?, field(4, 0)?, field(5, 0)?);

        let instant = NaiveDate::from_ymd_opt(fields[0], month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .ok_or_else(invalid)?;

        Ok(Self { instant, precision })
    }

    /// ## Summary
    /// Tags an existing instant with a precision.
    ///
    /// The instant is kept exactly as given, finer fields included. Use
    /// [`Self::start_of`] to snap it to the start of its interval instead.
    #[must_use]
    pub const fn with_precision(instant: NaiveDateTime, precision: Precision) -> Self {
        Self { instant, precision }
    }

    /// ## Summary
    /// The date at `precision` whose interval contains `instant`.
    #[must_use]
    pub fn start_of(instant: NaiveDateTime, precision: Precision) -> Self {
        Self {
            instant: truncate(instant, precision),
            precision,
        }
    }

    /// ## Summary
    /// Lowers the precision to `precision` (never raises it) and snaps the
    /// instant to the start of the resulting interval.
    #[must_use]
    pub fn coarsen(self, precision: Precision) -> Self {
        Self::start_of(self.instant, precision.coarser(self.precision))
    }

    #[must_use]
    pub const fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.instant.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.instant.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.instant.day()
    }

    #[must_use]
    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    #[must_use]
    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    #[must_use]
    pub fn second(&self) -> u32 {
        self.instant.second()
    }

    /// ## Summary
    /// Canonical label, as long as the precision: `YYYY`, `YYYYMM`, ...,
    /// `YYYYMMDDHHMMSS`.
    #[must_use]
    pub fn format(&self) -> String {
        self.instant
            .format(self.precision.label_format())
            .to_string()
    }

    /// ## Summary
    /// Chronological order against a date, timestamp or calendar day.
    ///
    /// Against a calendar day only the date's own calendar day is compared.
    #[must_use]
    pub fn compare(&self, other: impl Into<Comparand>) -> Ordering {
        match other.into() {
            Comparand::Date(date) => self.instant.cmp(&date.instant),
            Comparand::Timestamp(timestamp) => self.instant.cmp(&timestamp),
            Comparand::Day(day) => self.instant.date().cmp(&day),
        }
    }

    /// ## Summary
    /// Precision-aware equality.
    ///
    /// - another `PrecisionDate`: precisions must agree, then the leading
    ///   fields up to that precision must agree;
    /// - a timestamp: the timestamp is truncated to this date's precision,
    ///   so `2019-05` matches any instant in May 2019;
    /// - a calendar day: this date's calendar day must equal it.
    #[must_use]
    pub fn matches(&self, other: impl Into<Comparand>) -> bool {
        let count = self.precision.field_count();
        match other.into() {
            Comparand::Date(date) => {
                self.precision == date.precision
                    && calendar_fields(&self.instant)[..count]
                        == calendar_fields(&date.instant)[..count]
            }
            Comparand::Timestamp(timestamp) => {
                calendar_fields(&self.instant)[..count] == calendar_fields(&timestamp)[..count]
            }
            Comparand::Day(day) => self.instant.date() == day,
        }
    }

    #[must_use]
    pub fn is_before(&self, other: impl Into<Comparand>) -> bool {
        self.compare(other).is_lt()
    }

    #[must_use]
    pub fn is_after(&self, other: impl Into<Comparand>) -> bool {
        self.compare(other).is_gt()
    }

    #[must_use]
    pub fn is_at_or_before(&self, other: impl Into<Comparand>) -> bool {
        self.compare(other).is_le()
    }

    #[must_use]
    pub fn is_at_or_after(&self, other: impl Into<Comparand>) -> bool {
        self.compare(other).is_ge()
    }

    /// ## Summary
    /// The next date at the same precision.
    ///
    /// Years and months step by calendar field (months roll over the year);
    /// days and finer step by a fixed duration.
    ///
    /// ## Errors
    /// Returns `TimeError::OutOfRange` if the result is not representable.
    pub fn increment(&self) -> TimeResult<Self> {
        self.step(true)
    }

    /// ## Summary
    /// The previous date at the same precision.
    ///
    /// ## Errors
    /// Returns `TimeError::OutOfRange` if the result is not representable.
    pub fn decrement(&self) -> TimeResult<Self> {
        self.step(false)
    }

    fn step(&self, forward: bool) -> TimeResult<Self> {
        let stepped = match self.precision {
            Precision::Year => {
                let year = if forward {
                    self.year().checked_add(1)
                } else {
                    self.year().checked_sub(1)
                };
                year.and_then(|y| month_start(y, 1))
            }
            Precision::Month => {
                let year_month = match (self.month(), forward) {
                    (12, true) => self.year().checked_add(1).map(|y| (y, 1)),
                    (1, false) => self.year().checked_sub(1).map(|y| (y, 12)),
                    (m, true) => Some((self.year(), m + 1)),
                    (m, false) => Some((self.year(), m - 1)),
                };
                year_month.and_then(|(y, m)| month_start(y, m))
            }
            Precision::Day | Precision::Hour | Precision::Minute | Precision::Second => {
                let delta = fixed_step(self.precision);
                let delta = if forward { delta } else { -delta };
                self.instant.checked_add_signed(delta)
            }
        };

        stepped
            .map(|instant| Self::with_precision(instant, self.precision))
            .ok_or_else(|| {
                let direction = if forward { "after" } else { "before" };
                TimeError::OutOfRange(format!(
                    "no {} {direction} {self}",
                    self.precision
                ))
            })
    }

    /// ## Summary
    /// The instant used as the inclusive upper bound of a range ending at
    /// this date: the start of the next interval, less a small epsilon.
    ///
    /// The result keeps this date's precision and formats to the same label,
    /// but it is not the start of an interval.
    ///
    /// ## Errors
    /// Returns `TimeError::OutOfRange` if there is no next interval.
    pub fn interval_end(&self) -> TimeResult<Self> {
        let next = self.increment()?;
        next.instant
            .checked_sub_signed(TimeDelta::milliseconds(INTERVAL_END_EPSILON_MS))
            .map(|instant| Self::with_precision(instant, self.precision))
            .ok_or_else(|| TimeError::OutOfRange(format!("no interval end for {self}")))
    }
}

fn month_start(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.and_time(NaiveTime::MIN))
}

fn fixed_step(precision: Precision) -> TimeDelta {
    match precision {
        Precision::Hour => TimeDelta::hours(1),
        Precision::Minute => TimeDelta::minutes(1),
        Precision::Second => TimeDelta::seconds(1),
        Precision::Year | Precision::Month | Precision::Day => TimeDelta::days(1),
    }
}

/// Year, month, day, hour, minute, second.
fn calendar_fields(instant: &NaiveDateTime) -> [i64; 6] {
    [
        i64::from(instant.year()),
        i64::from(instant.month()),
        i64::from(instant.day()),
        i64::from(instant.hour()),
        i64::from(instant.minute()),
        i64::from(instant.second()),
    ]
}

fn truncate(instant: NaiveDateTime, precision: Precision) -> NaiveDateTime {
    let (date, time) = (instant.date(), instant.time());
    let (month, day) = match precision {
        Precision::Year => (1, 1),
        Precision::Month => (date.month(), 1),
        _ => (date.month(), date.day()),
    };
    let (hour, minute, second) = match precision {
        Precision::Year | Precision::Month | Precision::Day => (0, 0, 0),
        Precision::Hour => (time.hour(), 0, 0),
        Precision::Minute => (time.hour(), time.minute(), 0),
        Precision::Second => (time.hour(), time.minute(), time.second()),
    };

    NaiveDate::from_ymd_opt(date.year(), month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .unwrap_or(instant)
}

impl PartialEq for PrecisionDate {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for PrecisionDate {}

impl PartialEq<NaiveDateTime> for PrecisionDate {
    fn eq(&self, other: &NaiveDateTime) -> bool {
        self.matches(*other)
    }
}

impl PartialEq<PrecisionDate> for NaiveDateTime {
    fn eq(&self, other: &PrecisionDate) -> bool {
        other.matches(*self)
    }
}

impl PartialEq<NaiveDate> for PrecisionDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.matches(*other)
    }
}

impl PartialEq<PrecisionDate> for NaiveDate {
    fn eq(&self, other: &PrecisionDate) -> bool {
        other.matches(*self)
    }
}

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instant.format(self.precision.label_format()))
    }
}

impl FromStr for PrecisionDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PrecisionDate {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PrecisionDate> for String {
    fn from(date: PrecisionDate) -> Self {
        date.format()
    }
}
