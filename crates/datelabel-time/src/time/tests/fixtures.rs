//! Label fixtures shared by the date label tests.

use crate::time::core::Precision;

/// One canonical label per precision, with the precision it carries.
pub const CANONICAL_DATES: &[(&str, Precision)] = &[
    ("2000", Precision::Year),
    ("200005", Precision::Month),
    ("20000501", Precision::Day),
    ("2000050113", Precision::Hour),
    ("200005011330", Precision::Minute),
    ("20000501133059", Precision::Second),
];

/// Hyphenated spellings and the canonical label they normalize to.
pub const HYPHENATED_DATES: &[(&str, &str)] = &[
    ("2000", "2000"),
    ("2000-05", "200005"),
    ("2000-5", "200005"),
    ("2000-05-01", "20000501"),
    ("2000-05-01-13", "2000050113"),
    ("2000-5-1-13-30", "200005011330"),
    ("2000-05-01-13-30-59", "20000501133059"),
];

pub const CANONICAL_RANGES: &[&str] = &[
    "1990-1999",
    "199001-199912",
    "19900101-19991231",
    "1990010100-1990010123",
];
