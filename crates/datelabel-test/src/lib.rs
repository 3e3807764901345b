//! Integration test support for the datelabel crates.
//!
//! Re-exports the workspace crates under one path and provides small
//! builders shared by the integration tests.

pub mod component {
    pub use datelabel_core::{config, constants, logging};
    pub use datelabel_time::time;

    pub mod error {
        pub use datelabel_core::error::*;
        pub use datelabel_time::error::*;
    }
}

pub mod helpers {
    use anyhow::Result;
    use chrono::{NaiveDate, NaiveDateTime};

    use datelabel_time::{DateRange, PrecisionDate};

    /// ## Summary
    /// Parses a date label, attaching the label to any error.
    ///
    /// ## Errors
    /// Returns an error if the label is malformed.
    pub fn date(label: &str) -> Result<PrecisionDate> {
        PrecisionDate::parse(label).map_err(|e| anyhow::anyhow!("date {label:?}: {e}"))
    }

    /// ## Summary
    /// Parses a range label, attaching the label to any error.
    ///
    /// ## Errors
    /// Returns an error if the label is malformed or not a valid range.
    pub fn range(label: &str) -> Result<DateRange> {
        DateRange::parse(label).map_err(|e| anyhow::anyhow!("range {label:?}: {e}"))
    }

    /// ## Summary
    /// Builds a timestamp from calendar fields.
    ///
    /// ## Errors
    /// Returns an error if the fields name no real instant.
    pub fn timestamp(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .ok_or_else(|| anyhow::anyhow!("invalid timestamp {year}-{month}-{day}"))
    }

    /// ## Summary
    /// Builds a calendar day.
    ///
    /// ## Errors
    /// Returns an error if the fields name no real day.
    pub fn day(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| anyhow::anyhow!("invalid day {year}-{month}-{day}"))
    }
}
