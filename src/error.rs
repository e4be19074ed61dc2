//! Error types for the Tableau API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use tableau_api::{Credentials, ConfigError};
//!
//! let result = Credentials::new("", "password", "");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide the name of a Tableau user account.")]
    EmptyUsername,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide the password for the Tableau user account.")]
    EmptyPassword,

    /// Server URL is invalid.
    #[error("Invalid server URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://tableau.example.com').")]
    InvalidServerUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: '<major>.<minor>' (e.g., '3.4').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
