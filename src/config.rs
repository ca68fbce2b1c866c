use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const DEFAULT_PRECISION: usize = 6;
pub const DEFAULT_TOLERANCE: f32 = 0.00001;

/// Largest precision the formatter accepts
pub const MAX_PRECISION: usize = u16::MAX as usize;

const PRINT_SECTION: &str = "print";
const COMPARE_SECTION: &str = "compare";

/// Host-tunable knobs for debug output and approximate comparison
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Settings {
    /// Decimal places used by the debug printer
    pub precision: usize,
    /// Absolute tolerance for `approx_eq` checks
    pub tolerance: f32,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            precision: DEFAULT_PRECISION,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Settings {
    /// Missing sections or keys fall back to defaults;
    /// values that fail to parse are errors.
    pub fn from_ini(config: &ini::Ini) -> Result<Settings> {
        let defaults = Settings::default();

        let precision = optional_setting(
            config,
            PRINT_SECTION,
            "precision",
            |precision: &usize| *precision <= MAX_PRECISION,
        )?
            .unwrap_or(defaults.precision);

        let tolerance = optional_setting(
            config,
            COMPARE_SECTION,
            "tolerance",
            |tolerance: &f32| *tolerance >= 0.,
        )?
            .unwrap_or(defaults.tolerance);

        let settings = Settings {
            precision,
            tolerance,
        };

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Settings> {
        let config = ini::Ini::load_from_str(text)
            .map_err(ini::Error::Parse)?;

        Settings::from_ini(&config)
    }

    /// Fails if the file does not exist
    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Settings> {
        Settings::from_ini(&load_config(filename)?)
    }

    pub fn load_or_default<P: AsRef<Path>>(filename: P) -> Result<Settings> {
        let filename = filename.as_ref();

        if !filename.exists() {
            warn!(
                "Settings file \"{}\" not found, using defaults",
                filename.display(),
            );

            return Ok(Settings::default());
        }

        Settings::load(filename)
    }
}

pub fn load_config<P: AsRef<Path>>(filename: P) -> Result<ini::Ini> {
    Ok(ini::Ini::load_from_file(filename)?)
}

/// Strict lookup: both the section and the setting must be present
pub fn load_section_setting(
    config:  &ini::Ini,
    section: &str,
    setting: &str,
) -> Result<String> {
    let settings = config.section(Some(section))
        .ok_or_else(|| Error::MissingSection {
            section: section.to_string(),
        })?;

    settings.get(setting)
        .map(|value| value.to_string())
        .ok_or_else(|| Error::MissingSetting {
            section: section.to_string(),
            setting: setting.to_string(),
        })
}

/// Values that fail to parse or fail `valid` are errors
fn optional_setting<T, F>(
    config:  &ini::Ini,
    section: &str,
    setting: &str,
    valid:   F,
) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&T) -> bool,
{
    let value = match load_section_setting(config, section, setting) {
        Ok(value) => value,
        Err(Error::MissingSection { .. })
            | Err(Error::MissingSetting { .. }) => return Ok(None),
        Err(e) => return Err(e),
    };

    match value.trim().parse::<T>() {
        Ok(parsed) if valid(&parsed) => Ok(Some(parsed)),
        _ => Err(Error::InvalidSetting {
            section: section.to_string(),
            setting: setting.to_string(),
            value,
        }),
    }
}
