//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use chrono::Datelike;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidaySchedule};

use super::types::{CompanyMetadata, HolidayFile, PayrollConfig, WorkdayRules};

/// Loads and provides access to a payroll configuration.
///
/// The loader reads YAML files from a configuration directory and provides
/// methods to access the company metadata, workday rules and holidays.
///
/// # Directory Structure
///
/// ```text
/// config/motorph/
/// ├── company.yaml
/// ├── rules.yaml
/// └── holidays/
///     └── 2024.yaml
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if company.yaml or rules.yaml
    /// is missing, and [`EngineError::ConfigParseError`] if any file contains
    /// invalid YAML or a holiday file lists a date outside its `year`. A
    /// missing or empty holidays directory is not an error.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyMetadata>(&path.join("company.yaml"))?;
        let rules = Self::load_yaml::<WorkdayRules>(&path.join("rules.yaml"))?;
        let holidays = Self::load_holidays(&path.join("holidays"))?;

        debug!(
            company = %company.code,
            holidays = holidays.len(),
            "loaded payroll configuration"
        );

        let config = PayrollConfig::new(company, rules, HolidaySchedule::new(holidays));

        Ok(Self { config })
    }

    /// Loads and deserializes a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday file from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<Holiday>> {
        if !holidays_dir.exists() {
            return Ok(Vec::new());
        }

        let holidays_dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file = Self::load_yaml::<HolidayFile>(&path)?;
                if let Some(stray) = file.holidays.iter().find(|h| h.date.year() != file.year) {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "holiday '{}' on {} is outside year {}",
                            stray.name, stray.date, file.year
                        ),
                    });
                }
                debug!(year = file.year, count = file.holidays.len(), "loaded holiday file");
                holidays.extend(file.holidays);
            }
        }

        Ok(holidays)
    }

    /// Returns the complete configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Returns the workday rules.
    pub fn rules(&self) -> &WorkdayRules {
        self.config.rules()
    }

    /// Returns the holiday schedule.
    pub fn holidays(&self) -> &HolidaySchedule {
        self.config.holidays()
    }
}
