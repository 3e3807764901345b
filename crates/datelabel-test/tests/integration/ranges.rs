//! `DateRange` through the public API.

use anyhow::Result;
use datelabel_test::component::error::TimeError;
use datelabel_test::component::time::core::{DateRange, RangeInput};
use datelabel_test::helpers::{date, day, range};

#[test_log::test]
fn decade_contains_its_last_day() -> Result<()> {
    let decade = range("1990-1999")?;

    assert!(decade.contains_point(day(1995, 6, 1)?));
    assert!(decade.contains_point(day(1999, 12, 31)?));
    assert!(!decade.contains_point(day(2000, 1, 1)?));
    Ok(())
}

#[test_log::test]
fn contiguous_halves_merge_into_decade() -> Result<()> {
    let merged = DateRange::from_ranges(vec![range("1990-1994")?, range("1995-1999")?])?;
    assert_eq!(merged, range("1990-1999")?);

    let with_gap = DateRange::from_ranges(vec![
        range("1990-1994")?,
        range("1995-1999")?,
        range("2001-2005")?,
    ]);
    assert!(matches!(
        with_gap,
        Err(TimeError::NonContiguousRanges { .. })
    ));
    Ok(())
}

#[test]
fn overlap_is_not_containment() -> Result<()> {
    let a = range("2000-2010")?;
    let b = range("2005-2020")?;

    assert!(a.overlaps(&b));
    assert!(!a.contains(&b));
    Ok(())
}

#[test]
fn intersection_trims_to_shared_years() -> Result<()> {
    let shared = range("2000-2010")?.intersection(&range("2005-2015")?)?;
    assert_eq!(shared, range("2005-2010")?);

    let disjoint = range("2000-2004")?.intersection(&range("2006-2010")?);
    assert!(matches!(
        disjoint,
        Err(TimeError::EmptyIntersection { .. })
    ));
    Ok(())
}

#[test]
fn every_input_shape_builds_the_same_range() -> Result<()> {
    let expected = range("2000-2009")?;
    let inputs = [
        RangeInput::Text("2000-2009"),
        RangeInput::Labels("2000", "2009"),
        RangeInput::Pair(date("2000")?, date("2009")?),
        RangeInput::Dates(vec![date("2003")?, date("2009")?, date("2000")?]),
        RangeInput::Ranges(vec![range("2005-2009")?, range("2000-2004")?]),
    ];

    for input in inputs {
        assert_eq!(DateRange::from_input(input)?, expected);
    }
    Ok(())
}

#[test]
fn endpoints_expose_nominal_and_inclusive_end() -> Result<()> {
    let months = range("200001-200003")?;

    assert_eq!(months.start(), date("200001")?);
    assert_eq!(months.nominal_end(), date("200003")?);
    assert_eq!(months.end().format(), "200003");
    assert!(months.end().is_after(months.nominal_end()));
    assert!(months.end().is_before(date("200004")?));
    Ok(())
}

#[test]
fn backwards_range_is_invalid() {
    assert!(matches!(
        DateRange::parse("1999-1990"),
        Err(TimeError::InvalidRange { .. })
    ));
}
