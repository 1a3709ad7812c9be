//! Error types for the Payroll Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Expected "not found" outcomes of a payroll query are not errors; they are
//! reported through [`crate::calculation::PayrollOutcome`].

use thiserror::Error;

/// The main error type for the Payroll Computation Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A payroll query was malformed (e.g. an inverted date range).
    #[error("Invalid payroll query: {message}")]
    InvalidQuery {
        /// A description of what made the query invalid.
        message: String,
    },

    /// Employee master data contained an unusable value.
    #[error("Invalid employee '{employee_id}' field '{field}': {message}")]
    InvalidEmployee {
        /// The employee the field belongs to.
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/company.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/company.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/rules.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/rules.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_query_displays_message() {
        let error = EngineError::InvalidQuery {
            message: "end date 2024-06-01 is before start date 2024-06-30".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payroll query: end date 2024-06-01 is before start date 2024-06-30"
        );
    }

    #[test]
    fn test_invalid_employee_displays_id_field_and_message() {
        let error = EngineError::InvalidEmployee {
            employee_id: "10001".to_string(),
            field: "hourly_rate".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee '10001' field 'hourly_rate': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_query() -> EngineResult<()> {
            Err(EngineError::InvalidQuery {
                message: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_query()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
