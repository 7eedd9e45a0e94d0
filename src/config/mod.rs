//! Configuration types for the Maropost API SDK.
//!
//! This module provides the core configuration types used to initialize
//! resource clients for API communication with Maropost.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MaropostConfig`]: The main configuration struct holding credentials and settings
//! - [`MaropostConfigBuilder`]: A builder for constructing [`MaropostConfig`] instances
//! - [`AccountId`]: A validated account ID newtype
//! - [`AuthToken`]: A validated auth token newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use maropost_api::{AccountId, AuthToken, MaropostConfig};
//!
//! let config = MaropostConfig::builder()
//!     .account_id(AccountId::new(1000).unwrap())
//!     .auth_token(AuthToken::new("my-auth-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.account_id().get(), 1000);
//! ```

mod newtypes;

pub use newtypes::{AccountId, AuthToken};

use std::time::Duration;

use crate::error::ConfigError;

/// Default API base URL. Account ID and resource segments are appended to it.
pub const DEFAULT_API_BASE: &str = "https://api.maropost.com/accounts";

/// Default request timeout applied to every HTTP call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Maropost API SDK.
///
/// Holds the account ID and auth token used by every resource client, plus
/// transport settings. Credentials are immutable once the config is built;
/// clients clone the config at construction and share it for their lifetime.
///
/// # Thread Safety
///
/// `MaropostConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use maropost_api::{AccountId, AuthToken, MaropostConfig};
///
/// let config = MaropostConfig::builder()
///     .account_id(AccountId::new(1000).unwrap())
///     .auth_token(AuthToken::new("my-auth-token").unwrap())
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct MaropostConfig {
    account_id: AccountId,
    auth_token: AuthToken,
    api_base: String,
    timeout: Duration,
}

impl MaropostConfig {
    /// Creates a new builder for constructing a `MaropostConfig`.
    #[must_use]
    pub fn builder() -> MaropostConfigBuilder {
        MaropostConfigBuilder::default()
    }

    /// Returns the account ID.
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the API base URL (without the account ID segment).
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for constructing [`MaropostConfig`] instances.
///
/// `account_id` and `auth_token` are required; `api_base` and `timeout`
/// fall back to [`DEFAULT_API_BASE`] and [`DEFAULT_TIMEOUT`].
#[derive(Debug, Default)]
pub struct MaropostConfigBuilder {
    account_id: Option<AccountId>,
    auth_token: Option<AuthToken>,
    api_base: Option<String>,
    timeout: Option<Duration>,
}

impl MaropostConfigBuilder {
    /// Sets the account ID (required).
    #[must_use]
    pub const fn account_id(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, auth_token: AuthToken) -> Self {
        self.auth_token = Some(auth_token);
        self
    }

    /// Overrides the API base URL.
    ///
    /// Useful for routing through a proxy or pointing the SDK at a mock
    /// server in tests. A trailing `/` is stripped.
    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Sets the per-request timeout (default: 30 seconds).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account_id` or
    /// `auth_token` was not set, or [`ConfigError::InvalidApiBase`] if the
    /// base URL override carries no scheme.
    pub fn build(self) -> Result<MaropostConfig, ConfigError> {
        let account_id = self
            .account_id
            .ok_or(ConfigError::MissingRequiredField { field: "account_id" })?;
        let auth_token = self
            .auth_token
            .ok_or(ConfigError::MissingRequiredField { field: "auth_token" })?;

        let api_base = self
            .api_base
            .map_or_else(|| DEFAULT_API_BASE.to_string(), |base| base);
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(ConfigError::InvalidApiBase { url: api_base });
        }
        let api_base = api_base.trim_end_matches('/').to_string();

        Ok(MaropostConfig {
            account_id,
            auth_token,
            api_base,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_builder() -> MaropostConfigBuilder {
        MaropostConfig::builder()
            .account_id(AccountId::new(1000).unwrap())
            .auth_token(AuthToken::new("test-token").unwrap())
    }

    #[test]
    fn test_build_with_defaults() {
        let config = test_builder().build().unwrap();

        assert_eq!(config.account_id().get(), 1000);
        assert_eq!(config.auth_token().as_ref(), "test-token");
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_build_requires_account_id() {
        let result = MaropostConfig::builder()
            .auth_token(AuthToken::new("test-token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "account_id" })
        ));
    }

    #[test]
    fn test_build_requires_auth_token() {
        let result = MaropostConfig::builder()
            .account_id(AccountId::new(1000).unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "auth_token" })
        ));
    }

    #[test]
    fn test_api_base_override_strips_trailing_slash() {
        let config = test_builder()
            .api_base("http://localhost:8080/accounts/")
            .build()
            .unwrap();

        assert_eq!(config.api_base(), "http://localhost:8080/accounts");
    }

    #[test]
    fn test_api_base_without_scheme_is_rejected() {
        let result = test_builder().api_base("api.maropost.com").build();

        assert!(matches!(result, Err(ConfigError::InvalidApiBase { .. })));
    }

    #[test]
    fn test_timeout_override() {
        let config = test_builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MaropostConfig>();
    }
}
