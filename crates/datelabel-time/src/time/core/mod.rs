//! Date label value types.
//!
//! - [`PrecisionDate`]: a date known to a given [`Precision`]
//! - [`DateRange`]: a closed interval between two such dates
//! - [`Frequency`]: a labelled, approximate period such as `6hr`

mod date;
mod frequency;
mod precision;
mod range;

pub use date::{Comparand, PrecisionDate};
pub use frequency::{Frequency, FrequencyUnit};
pub use precision::Precision;
pub use range::{DateRange, RangeInput};
