//! Parse/format round-trip tests.
//!
//! A canonical label parsed and formatted again must come back unchanged, at
//! the same precision.

use proptest::prelude::*;
use rstest::rstest;

use super::fixtures::{CANONICAL_DATES, CANONICAL_RANGES, HYPHENATED_DATES};
use crate::time::core::{DateRange, Precision, PrecisionDate};

#[test]
fn canonical_dates_round_trip() {
    for (label, precision) in CANONICAL_DATES {
        let date = PrecisionDate::parse(label).expect("canonical label should parse");
        assert_eq!(date.precision(), *precision, "{label}");
        assert_eq!(date.format(), *label);

        let again = PrecisionDate::parse(&date.format()).expect("formatted label should parse");
        assert_eq!(again, date, "{label}");
    }
}

#[test]
fn hyphenated_dates_normalize() {
    for (hyphenated, canonical) in HYPHENATED_DATES {
        let date = PrecisionDate::parse(hyphenated).expect("hyphenated label should parse");
        assert_eq!(date.format(), *canonical, "{hyphenated}");
    }
}

#[test]
fn canonical_ranges_round_trip() {
    for label in CANONICAL_RANGES {
        let range = DateRange::parse(label).expect("canonical range should parse");
        assert_eq!(range.format(), *label);
        assert_eq!(
            DateRange::parse(&range.format()).expect("formatted range should parse"),
            range
        );
    }
}

#[rstest]
#[case(Precision::Year, "%Y")]
#[case(Precision::Month, "%Y%m")]
#[case(Precision::Day, "%Y%m%d")]
#[case(Precision::Hour, "%Y%m%d%H")]
#[case(Precision::Minute, "%Y%m%d%H%M")]
#[case(Precision::Second, "%Y%m%d%H%M%S")]
fn label_format_per_precision(#[case] precision: Precision, #[case] expected: &str) {
    assert_eq!(precision.label_format(), expected);
}

fn fields_strategy() -> impl Strategy<Value = Vec<i32>> {
    (
        1000..=9999_i32,
        1..=12_i32,
        1..=28_i32,
        0..=23_i32,
        0..=59_i32,
        0..=59_i32,
        1..=6_usize,
    )
        .prop_map(|(y, mo, d, h, mi, s, count)| {
            let mut fields = vec![y, mo, d, h, mi, s];
            fields.truncate(count);
            fields
        })
}

proptest! {
    #[test]
    fn formatted_fields_parse_back(fields in fields_strategy()) {
        let date = PrecisionDate::from_fields(&fields).expect("generated fields are valid");
        let label = date.format();

        prop_assert_eq!(label.len(), 4 + 2 * (fields.len() - 1));

        let parsed = PrecisionDate::parse(&label).expect("formatted label should parse");
        prop_assert_eq!(parsed.precision(), date.precision());
        prop_assert_eq!(parsed.instant(), date.instant());
        prop_assert_eq!(parsed.format(), label);
    }

    #[test]
    fn increment_then_decrement_is_identity(fields in fields_strategy()) {
        let date = PrecisionDate::from_fields(&fields).expect("generated fields are valid");
        let back = date
            .increment()
            .and_then(|next| next.decrement())
            .expect("steps stay in range");

        prop_assert_eq!(back, date);
        prop_assert_eq!(back.instant(), date.instant());
    }
}
