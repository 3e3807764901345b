//! Coarse data frequencies such as `6hr` or `monthly`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use datelabel_core::config::FrequencyConfig;
use datelabel_core::error::CoreError;
use datelabel_core::constants::{DAYS_PER_MONTH, DAYS_PER_SEASON, DAYS_PER_YEAR};

use crate::error::{TimeError, TimeResult};
use crate::time::parse::{ParseError, ParseErrorKind, parse_frequency_label};

/// Canonical frequency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyUnit {
    Year,
    Season,
    Month,
    Week,
    Day,
    Hour,
    Minute,
}

impl FrequencyUnit {
    pub const ALL: [Self; 7] = [
        Self::Year,
        Self::Season,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
    ];

    /// Canonical token used in labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "yr",
            Self::Season => "season",
            Self::Month => "mo",
            Self::Week => "wk",
            Self::Day => "day",
            Self::Hour => "hr",
            Self::Minute => "min",
        }
    }

    /// Resolves any built-in spelling (`"annually"`, `"hours"`, `"mo"`, ...).
    /// Expects a lowercase token.
    #[must_use]
    pub fn from_alias(token: &str) -> Option<Self> {
        let unit = match token {
            "yearly" | "year" | "years" | "yr" | "y" | "annually" | "annual" | "ann" => {
                Self::Year
            }
            "seasonally" | "seasonal" | "seasons" | "season" | "se" => Self::Season,
            "monthly" | "month" | "months" | "mon" | "mo" => Self::Month,
            "weekly" | "weeks" | "week" | "wk" | "w" => Self::Week,
            "daily" | "day" | "days" | "dy" | "d" | "diurnal" | "diurnally" => Self::Day,
            "hourly" | "hour" | "hours" | "hr" | "h" => Self::Hour,
            "minutes" | "minute" | "min" => Self::Minute,
            _ => return None,
        };
        Some(unit)
    }

    /// Resolves a canonical token only.
    #[must_use]
    pub fn from_canonical(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == token)
    }

    /// Approximate length of one unit. A year is 365 days, a season 91 and a
    /// month 30; only good for relative magnitude.
    #[must_use]
    pub fn approximate_length(self) -> TimeDelta {
        match self {
            Self::Year => TimeDelta::days(DAYS_PER_YEAR),
            Self::Season => TimeDelta::days(DAYS_PER_SEASON),
            Self::Month => TimeDelta::days(DAYS_PER_MONTH),
            Self::Week => TimeDelta::weeks(1),
            Self::Day => TimeDelta::days(1),
            Self::Hour => TimeDelta::hours(1),
            Self::Minute => TimeDelta::minutes(1),
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A frequency or period label: a positive quantity of a canonical unit.
///
/// Equality compares the label, not the length: `24hr != 1day`. Use
/// [`Self::length`] or `== TimeDelta` to compare magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Frequency {
    quantity: u32,
    unit: FrequencyUnit,
}

impl Frequency {
    /// ## Summary
    /// Builds a frequency from a quantity and any built-in unit spelling.
    ///
    /// ## Errors
    /// Returns `TimeError::MalformedInput` if the quantity is zero or the
    /// unit is unknown.
    pub fn new(quantity: u32, unit: &str) -> TimeResult<Self> {
        let unit_token = unit.trim().to_lowercase();
        let unit = FrequencyUnit::from_alias(&unit_token)
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnknownUnit, unit))?;
        Self::from_unit(quantity, unit)
    }

    /// ## Summary
    /// Builds a frequency from a quantity and a canonical unit.
    ///
    /// ## Errors
    /// Returns `TimeError::MalformedInput` if the quantity is zero.
    pub fn from_unit(quantity: u32, unit: FrequencyUnit) -> TimeResult<Self> {
        if quantity == 0 {
            return Err(
                ParseError::new(ParseErrorKind::InvalidQuantity, format!("0{unit}")).into(),
            );
        }
        Ok(Self { quantity, unit })
    }

    /// ## Summary
    /// Parses a label such as `"6hr"`, `"3 days"` or `"monthly"` (quantity 1).
    ///
    /// ## Errors
    /// Returns `TimeError::MalformedInput` if the label does not fit the
    /// grammar or its unit is unknown.
    pub fn parse(s: &str) -> TimeResult<Self> {
        Self::parse_with(s, |_| Ok(None))
    }

    /// ## Summary
    /// Like [`Self::parse`], but falls back to the configured aliases for
    /// units the built-in table does not know.
    ///
    /// ## Errors
    /// Returns `TimeError::MalformedInput` if the label does not fit the
    /// grammar or its unit is neither built in nor configured, and
    /// `CoreError::InvalidInput` if the configured alias does not name a
    /// canonical unit.
    pub fn parse_with_config(s: &str, config: &FrequencyConfig) -> TimeResult<Self> {
        Self::parse_with(s, |token| {
            config
                .resolve_alias(token)
                .map(|target| {
                    FrequencyUnit::from_canonical(target).ok_or_else(|| {
                        TimeError::from(CoreError::InvalidInput(format!(
                            "frequency alias {token:?} maps to unknown unit {target:?}"
                        )))
                    })
                })
                .transpose()
        })
    }

    fn parse_with(
        s: &str,
        fallback: impl Fn(&str) -> TimeResult<Option<FrequencyUnit>>,
    ) -> TimeResult<Self> {
        let (quantity, token) = parse_frequency_label(s).inspect_err(|e| {
            tracing::debug!(label = s, error = %e, "Rejected frequency label");
        })?;

        let unit = match FrequencyUnit::from_alias(&token) {
            Some(unit) => unit,
            None => fallback(&token)?.ok_or_else(|| {
                tracing::debug!(label = s, unit = %token, "Unknown frequency unit");
                ParseError::new(ParseErrorKind::UnknownUnit, s)
            })?,
        };

        tracing::trace!(label = s, quantity, unit = %unit, "Parsed frequency label");
        Self::from_unit(quantity, unit)
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub const fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// Approximate length, for ordering only. Saturates at `TimeDelta::MAX`.
    #[must_use]
    pub fn length(&self) -> TimeDelta {
        i32::try_from(self.quantity)
            .ok()
            .and_then(|q| self.unit.approximate_length().checked_mul(q))
            .unwrap_or(TimeDelta::MAX)
    }

    /// Orders by approximate length.
    #[must_use]
    pub fn cmp_length(&self, other: &Self) -> Ordering {
        self.length().cmp(&other.length())
    }

    /// ## Summary
    /// Canonical label, `"<quantity><unit>"`.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// ## Summary
    /// Short label in the local naming convention: hourly labels as-is,
    /// `"mon"` for one month and `"day"` for one day.
    ///
    /// ## Errors
    /// Returns `TimeError::UnsupportedLocalFormat` for any other frequency.
    pub fn format_local(&self) -> TimeResult<String> {
        match (self.unit, self.quantity) {
            (FrequencyUnit::Hour, _) => Ok(self.format()),
            (FrequencyUnit::Month, 1) => Ok("mon".to_string()),
            (FrequencyUnit::Day, 1) => Ok("day".to_string()),
            _ => Err(TimeError::UnsupportedLocalFormat(self.format())),
        }
    }
}

impl PartialEq<TimeDelta> for Frequency {
    fn eq(&self, other: &TimeDelta) -> bool {
        self.length() == *other
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quantity, self.unit)
    }
}

impl FromStr for Frequency {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Frequency {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        frequency.format()
    }
}
