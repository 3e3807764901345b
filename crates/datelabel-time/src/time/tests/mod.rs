//! Cross-type tests for date labels.

mod fixtures;
mod round_trip;
