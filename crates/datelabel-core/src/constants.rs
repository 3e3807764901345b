/// Prefix for environment variables read by [`crate::config::Settings::load`].
pub const ENV_PREFIX: &str = "DATELABEL";
/// Optional configuration file, looked up relative to the working directory.
pub const CONFIG_FILE_STEM: &str = "datelabel";
pub const CONFIG_FILE_NAME: &str = const_str::concat!(CONFIG_FILE_STEM, ".toml");

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Finest supported precision (seconds).
pub const MAX_PRECISION: u8 = 6;

/// Distance between the start of the next interval and the instant used as
/// a range's inclusive upper bound.
///
/// Kept at 100 ms for compatibility with existing labels; it carries no
/// meaning beyond "strictly inside the last unit".
pub const INTERVAL_END_EPSILON_MS: i64 = 100;

// Approximate unit lengths used by frequencies. Not calendar accurate.
pub const DAYS_PER_YEAR: i64 = 365;
pub const DAYS_PER_SEASON: i64 = 91;
pub const DAYS_PER_MONTH: i64 = 30;
