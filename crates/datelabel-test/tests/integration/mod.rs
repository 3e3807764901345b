//! Integration tests grouped by value type.

mod config;
mod dates;
mod frequencies;
mod ranges;
