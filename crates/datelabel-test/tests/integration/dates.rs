//! `PrecisionDate` through the public API.

use anyhow::Result;
use datelabel_test::component::error::TimeError;
use datelabel_test::component::time::core::{Comparand, Precision, PrecisionDate};
use datelabel_test::helpers::{date, day, timestamp};

#[test_log::test]
fn month_label_equals_any_timestamp_in_month() -> Result<()> {
    let may = date("2019-05")?;

    assert_eq!(may, timestamp(2019, 5, 18, 0, 0, 0)?);
    assert_eq!(may, timestamp(2019, 5, 1, 0, 0, 0)?);
    assert_ne!(may, timestamp(2019, 6, 1, 0, 0, 0)?);
    Ok(())
}

#[test]
fn equal_instants_at_different_precisions_are_unequal() -> Result<()> {
    let month = date("2019-05")?;
    let day_label = date("2019-05-01")?;

    assert_ne!(month, day_label);
    assert!(!month.is_before(day_label));
    assert!(!month.is_after(day_label));
    Ok(())
}

#[test]
fn month_steps_roll_over_years() -> Result<()> {
    let december = PrecisionDate::from_fields(&[2020, 12])?;
    let january = PrecisionDate::from_fields(&[2021, 1])?;

    assert_eq!(december.increment()?, january);
    assert_eq!(january.decrement()?, december);
    Ok(())
}

#[test]
fn compact_and_hyphenated_labels_agree() -> Result<()> {
    assert_eq!(date("2000-05-01-12")?, date("2000050112")?);
    assert_eq!(date("2000-05-01-12")?.precision(), Precision::Hour);
    assert_eq!("20000501".parse::<PrecisionDate>()?.format(), "20000501");
    Ok(())
}

#[test]
fn explicit_comparands() -> Result<()> {
    let label = date("20000501")?;
    let comparands = [
        Comparand::from(date("20000501")?),
        Comparand::from(timestamp(2000, 5, 1, 18, 0, 0)?),
        Comparand::from(day(2000, 5, 1)?),
    ];

    for comparand in comparands {
        assert!(label.matches(comparand), "{comparand:?}");
        assert!(label.is_at_or_before(comparand) || label.is_at_or_after(comparand));
    }
    Ok(())
}

#[test]
fn copy_and_reprecision_keeps_instant() -> Result<()> {
    let instant = timestamp(2000, 5, 17, 13, 30, 0)?;

    let tagged = PrecisionDate::with_precision(instant, Precision::Month);
    assert_eq!(tagged.instant(), instant);
    assert_eq!(tagged.format(), "200005");

    let snapped = PrecisionDate::start_of(instant, Precision::Month);
    assert_eq!(snapped, date("2000-05")?);
    assert_eq!(snapped.instant(), timestamp(2000, 5, 1, 0, 0, 0)?);
    Ok(())
}

#[test]
fn malformed_labels_are_typed() {
    for label in ["", "20", "2000-13", "2000x", "2000-01-01-00-00-00-00"] {
        assert!(
            matches!(PrecisionDate::parse(label), Err(TimeError::MalformedInput(_))),
            "{label:?}"
        );
    }
}
