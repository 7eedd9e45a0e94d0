//! Uniform result wrappers for API calls.
//!
//! Every resource-client method returns an [`OperationResult`]: a success
//! flag, an optional error message, and the decoded JSON payload when one was
//! received. Failures — local validation, network faults, non-2xx statuses,
//! malformed JSON — all surface through this one shape; no error type crosses
//! the client boundary.
//!
//! [`GetResult`] is the typed-decoding variant: calling
//! [`OperationResult::decode`] deserializes the payload into a caller-chosen
//! type while keeping the success/error state alongside it.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// The outcome of a single API call.
///
/// Created once per call and immutable afterwards (the one sanctioned
/// exception is [`with_error_message`](Self::with_error_message), used by the
/// relational-table delete path to reclassify a failure).
///
/// # Example
///
/// ```rust
/// use maropost_api::OperationResult;
/// use serde_json::json;
///
/// let result = OperationResult::ok(Some(json!({"journeys": []})));
/// assert!(result.is_success());
/// assert!(result.error_message().is_none());
///
/// let failed = OperationResult::err("When providing a bccEmail, it needs to be a well-formed email address.");
/// assert!(!failed.is_success());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    is_success: bool,
    error_message: Option<String>,
    data: Option<Value>,
}

impl OperationResult {
    /// Creates a successful result carrying the decoded response payload.
    #[must_use]
    pub const fn ok(data: Option<Value>) -> Self {
        Self {
            is_success: true,
            error_message: None,
            data,
        }
    }

    /// Creates a failed result with the given error message.
    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            error_message: Some(message.into()),
            data: None,
        }
    }

    /// Creates a failed result that still carries a response payload.
    #[must_use]
    pub fn err_with_data(message: impl Into<String>, data: Value) -> Self {
        Self {
            is_success: false,
            error_message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Returns a copy of this result with the error message replaced.
    ///
    /// The success flag and payload are untouched. Used when a follow-up read
    /// reclassifies a failure (see `RelationalTables::delete`).
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Returns `true` if the call succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.is_success
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns the decoded response payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Consumes the result and returns the decoded response payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<Value> {
        self.data
    }

    /// Decodes the payload into `T`, producing a [`GetResult`].
    ///
    /// A failed result decodes to a failed `GetResult` with the original
    /// error message. A successful result whose payload does not match `T`
    /// decodes to a failed `GetResult` carrying the deserialization error.
    #[must_use]
    pub fn decode<T: DeserializeOwned>(&self) -> GetResult<T> {
        if !self.is_success {
            return GetResult {
                is_success: false,
                error_message: self.error_message.clone(),
                data: None,
            };
        }

        match &self.data {
            None => GetResult {
                is_success: true,
                error_message: None,
                data: None,
            },
            Some(value) => match serde_json::from_value::<T>(value.clone()) {
                Ok(decoded) => GetResult {
                    is_success: true,
                    error_message: None,
                    data: Some(decoded),
                },
                Err(e) => GetResult {
                    is_success: false,
                    error_message: Some(format!("Failed to decode response: {e}")),
                    data: None,
                },
            },
        }
    }
}

/// An [`OperationResult`] whose payload has been decoded into a typed value.
#[derive(Debug, Clone)]
pub struct GetResult<T> {
    is_success: bool,
    error_message: Option<String>,
    data: Option<T>,
}

impl<T> GetResult<T> {
    /// Returns `true` if the call succeeded and the payload decoded cleanly.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.is_success
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns the decoded payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the result and returns the decoded payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
