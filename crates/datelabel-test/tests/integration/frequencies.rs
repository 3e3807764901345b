//! `Frequency` through the public API.

use anyhow::Result;
use chrono::TimeDelta;
use datelabel_test::component::error::TimeError;
use datelabel_test::component::time::core::{Frequency, FrequencyUnit};

#[test_log::test]
fn labels_compare_by_label_not_length() -> Result<()> {
    let hours = Frequency::parse("24hr")?;
    let days = Frequency::parse("1day")?;

    assert_ne!(hours, days);
    assert_eq!(hours.length(), days.length());
    assert_eq!(hours, TimeDelta::hours(24));
    Ok(())
}

#[test]
fn bare_unit_has_quantity_one() -> Result<()> {
    assert_eq!(Frequency::parse("monthly")?, Frequency::new(1, "mo")?);
    assert_eq!(Frequency::parse("Monthly")?.unit(), FrequencyUnit::Month);
    Ok(())
}

#[test]
fn formats() -> Result<()> {
    let six_hourly: Frequency = "6 hr".parse()?;

    assert_eq!(six_hourly.format(), "6hr");
    assert_eq!(six_hourly.format_local()?, "6hr");
    assert_eq!(Frequency::parse("daily")?.format_local()?, "day");
    assert!(matches!(
        Frequency::parse("2mo")?.format_local(),
        Err(TimeError::UnsupportedLocalFormat(_))
    ));
    Ok(())
}

#[test]
fn unknown_unit_is_malformed() {
    assert!(matches!(
        Frequency::parse("3 fortnights"),
        Err(TimeError::MalformedInput(_))
    ));
}
