//! Configuration loading and management for the Payroll Computation Engine.
//!
//! This module provides functionality to load payroll configurations from YAML
//! files, including company metadata, workday rules and the holiday schedule,
//! and the server settings read from the environment.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/motorph").unwrap();
//! println!("Loaded company: {}", config.company().name);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{DEFAULT_BIND_ADDR, DEFAULT_CONFIG_DIR, ServerSettings};
pub use types::{CompanyMetadata, HolidayFile, PayrollConfig, WorkdayRules};
