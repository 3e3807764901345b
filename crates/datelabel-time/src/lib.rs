//! Dates of variable precision, closed date ranges and coarse frequencies,
//! as found in file names and paths (`2000`, `200005`, `1990-1999`, `6hr`).
//!
//! These types compare and bucket labels. They are not meant for calendar
//! arithmetic beyond stepping a date by one unit of its own precision.

pub mod error;
pub mod time;

pub use error::{TimeError, TimeResult};
pub use time::core::{
    Comparand, DateRange, Frequency, FrequencyUnit, Precision, PrecisionDate, RangeInput,
};
