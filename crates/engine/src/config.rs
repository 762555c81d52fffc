//! # Engine Configuration
//!
//! Loads logging and reference-data settings for the slot engine from
//! environment variables, with built-in defaults for everything.
//!
//! ## Environment Variables
//!
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `HEARING_OFFICES_PATH`: JSON file of `{code, displayLabel, timezone}` offices
//!   replacing the built-in directory
//! - `HEARING_HOURS_OVERRIDES_PATH`: JSON file of `{code, startLocal, endLocal, zone}`
//!   business-hours overrides replacing the built-in table

use std::{env, fs, path::PathBuf};

use eyre::{Result, WrapErr};
use hearing_slots_core::OfficeDirectory;
use tracing::{Level, info};

use crate::business_hours::RegionalOfficeBusinessHours;
use crate::slots::SlotGenerator;

/// Configuration for the hearing slot engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Log level for the engine's tracing output
    pub log_level: Level,

    /// Optional office directory override
    pub offices_path: Option<PathBuf>,

    /// Optional business-hours override table
    pub hours_overrides_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            offices_path: None,
            hours_overrides_path: None,
        }
    }
}

impl EngineConfig {
    /// Creates a new EngineConfig from environment variables, reading a
    /// `.env` file first if one is present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self::from_getter(|key| env::var(key).ok()))
    }

    /// Builds the configuration from an arbitrary lookup, used by tests.
    pub fn from_getter<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match get("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let path = |key: &str| {
            get(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            log_level,
            offices_path: path("HEARING_OFFICES_PATH"),
            hours_overrides_path: path("HEARING_HOURS_OVERRIDES_PATH"),
        }
    }

    /// Loads the office directory, falling back to the built-in table.
    ///
    /// # Errors
    ///
    /// This function will return an error if the configured file cannot be
    /// read or does not hold a valid office list.
    pub fn office_directory(&self) -> Result<OfficeDirectory> {
        let Some(path) = &self.offices_path else {
            return Ok(OfficeDirectory::builtin());
        };

        let json = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read office directory {}", path.display()))?;
        let directory = OfficeDirectory::from_json(&json)
            .wrap_err_with(|| format!("Invalid office directory {}", path.display()))?;
        info!("Loaded {} offices from {}", directory.len(), path.display());

        Ok(directory)
    }

    /// Builds the business-hours policy over the configured office directory.
    pub fn business_hours(&self) -> Result<RegionalOfficeBusinessHours> {
        let hours = RegionalOfficeBusinessHours::standard(self.office_directory()?);
        let Some(path) = &self.hours_overrides_path else {
            return Ok(hours);
        };

        let json = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read business hours overrides {}", path.display()))?;
        let hours = hours
            .with_overrides_json(&json)
            .wrap_err_with(|| format!("Invalid business hours overrides {}", path.display()))?;
        info!("Loaded business hours overrides from {}", path.display());

        Ok(hours)
    }

    pub fn slot_generator(&self) -> Result<SlotGenerator> {
        Ok(SlotGenerator::new(self.business_hours()?))
    }
}
