//! Process settings read from the environment.

use std::env;

/// Default configuration directory.
pub const DEFAULT_CONFIG_DIR: &str = "./config/motorph";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Directory holding company.yaml, rules.yaml and holidays/.
    pub config_dir: String,
    /// Address the server listens on.
    pub bind_addr: String,
}

impl ServerSettings {
    /// Reads `PAYROLL_CONFIG_DIR` and `PAYROLL_BIND_ADDR`, loading a `.env`
    /// file first if one exists. Unset variables fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(
            env::var("PAYROLL_CONFIG_DIR").ok(),
            env::var("PAYROLL_BIND_ADDR").ok(),
        )
    }

    fn from_vars(config_dir: Option<String>, bind_addr: Option<String>) -> Self {
        Self {
            config_dir: config_dir
                .filter(|dir| !dir.is_empty())
                .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string()),
            bind_addr: bind_addr
                .filter(|addr| !addr.is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}
