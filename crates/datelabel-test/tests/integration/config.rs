//! Configuration feeding the label types.

use anyhow::Result;
use datelabel_test::component::config::Settings;
use datelabel_test::component::error::{CoreError, TimeError};
use datelabel_test::component::time::core::Frequency;

#[test_log::test]
fn configured_aliases_are_honoured() -> Result<()> {
    let settings = Settings::from_toml_str(
        r#"
        [logging]
        level = "debug"

        [frequency.aliases]
        hrly = "hr"
        "#,
    )?;

    let frequency = Frequency::parse_with_config("3hrly", &settings.frequency)?;
    assert_eq!(frequency, Frequency::parse("3hr")?);
    assert!(Frequency::parse("3hrly").is_err());
    Ok(())
}

#[test]
fn defaults_resolve_builtin_units_only() -> Result<()> {
    let settings = Settings::from_toml_str("")?;

    assert_eq!(
        Frequency::parse_with_config("weekly", &settings.frequency)?,
        Frequency::parse("1wk")?
    );
    assert!(Frequency::parse_with_config("hrly", &settings.frequency).is_err());
    Ok(())
}

#[test_log::test]
fn alias_to_unknown_unit_is_a_config_error() -> Result<()> {
    let settings = Settings::from_toml_str(
        r#"
        [frequency.aliases]
        fortnightly = "2wk"
        "#,
    )?;

    let result = Frequency::parse_with_config("fortnightly", &settings.frequency);
    assert!(matches!(
        result,
        Err(TimeError::Core(CoreError::InvalidInput(_)))
    ));
    Ok(())
}
