//! Errors for the settings layer. The math itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read settings: {0}")]
    Ini(#[from] ini::Error),

    #[error("Failed to load section \"{section}\"")]
    MissingSection { section: String },

    #[error("Failed to load setting \"{setting}\" in section \"{section}\"")]
    MissingSetting { section: String, setting: String },

    #[error("Invalid value \"{value}\" for setting \"{setting}\" in section \"{section}\"")]
    InvalidSetting {
        section: String,
        setting: String,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
