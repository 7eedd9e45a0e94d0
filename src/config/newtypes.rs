//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around credential values that
//! validate their contents on construction. Invalid values are rejected with
//! clear error messages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A validated Maropost account ID.
///
/// Account IDs appear as a path segment in every request URL, so this newtype
/// rejects non-positive values up front rather than letting a bad ID produce
/// confusing server errors.
///
/// # Example
///
/// ```rust
/// use maropost_api::AccountId;
///
/// let id = AccountId::new(1000).unwrap();
/// assert_eq!(id.get(), 1000);
/// assert!(AccountId::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates a new validated account ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccountId`] if the ID is not positive.
    pub const fn new(account_id: i64) -> Result<Self, ConfigError> {
        if account_id <= 0 {
            return Err(ConfigError::InvalidAccountId { account_id });
        }
        Ok(Self(account_id))
    }

    /// Returns the raw account ID value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated Maropost auth token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AuthToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use maropost_api::AuthToken;
///
/// let token = AuthToken::new("my-auth-token").unwrap();
/// assert_eq!(token.as_ref(), "my-auth-token");
/// assert_eq!(format!("{token:?}"), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_accepts_positive_values() {
        let id = AccountId::new(1000).unwrap();
        assert_eq!(id.get(), 1000);
        assert_eq!(id.to_string(), "1000");
    }

    #[test]
    fn test_account_id_rejects_zero() {
        assert!(matches!(
            AccountId::new(0),
            Err(ConfigError::InvalidAccountId { account_id: 0 })
        ));
    }

    #[test]
    fn test_account_id_rejects_negative() {
        assert!(matches!(
            AccountId::new(-5),
            Err(ConfigError::InvalidAccountId { account_id: -5 })
        ));
    }

    #[test]
    fn test_account_id_serializes_transparently() {
        let id = AccountId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_auth_token_accepts_non_empty() {
        let token = AuthToken::new("secret-token").unwrap();
        assert_eq!(token.as_ref(), "secret-token");
    }

    #[test]
    fn test_auth_token_rejects_empty() {
        assert!(matches!(AuthToken::new(""), Err(ConfigError::EmptyAuthToken)));
    }

    #[test]
    fn test_auth_token_debug_masks_value() {
        let token = AuthToken::new("secret-token").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "AuthToken(*****)");
        assert!(!debug.contains("secret"));
    }
}
