//! Error types for SDK configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use maropost_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Maropost auth token.")]
    EmptyAuthToken,

    /// Account ID must be a positive integer.
    #[error("Invalid account ID '{account_id}'. Account IDs are positive integers.")]
    InvalidAccountId {
        /// The invalid account ID that was provided.
        account_id: i64,
    },

    /// API base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.maropost.com/accounts').")]
    InvalidApiBase {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_auth_token_error_message() {
        let error = ConfigError::EmptyAuthToken;
        let message = error.to_string();
        assert!(message.contains("Auth token cannot be empty"));
        assert!(message.contains("valid Maropost auth token"));
    }

    #[test]
    fn test_invalid_account_id_error_message() {
        let error = ConfigError::InvalidAccountId { account_id: -7 };
        let message = error.to_string();
        assert!(message.contains("-7"));
        assert!(message.contains("positive integers"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "auth_token",
        };
        let message = error.to_string();
        assert!(message.contains("auth_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAuthToken;
        let _: &dyn std::error::Error = &error;
    }
}
