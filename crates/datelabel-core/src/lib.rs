//! Shared plumbing for the datelabel crates: errors, configuration, logging
//! bootstrap and the fixed constants the value types are built on.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
