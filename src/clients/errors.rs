//! HTTP-specific error types for the Maropost API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors and request validation failures. These errors never cross the
//! resource-client boundary: the request engine normalizes all of them into
//! failed [`OperationResult`](crate::api::OperationResult)s.

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message field contains the error information serialized from the
/// response body's `error`/`errors` fields, in JSON format.
///
/// # Example
///
/// ```rust
/// use maropost_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"Not found"}"#.to_string(),
///     request_id: Some("abc-123".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub request_id: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as:
/// - Missing body for POST requests
/// - Body provided without `body_type`
/// - Empty request path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path resolved to nothing.
    #[error("Cannot build a request path from an empty resource and path.")]
    EmptyPath,
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations. It stays
/// internal to the request engine, which converts every variant into a
/// failed result before returning to SDK consumers.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_message_is_body_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"error":"Not Found"}"#.to_string(),
            request_id: None,
        };
        assert_eq!(error.to_string(), r#"{"error":"Not Found"}"#);
    }

    #[test]
    fn test_http_response_error_carries_request_id() {
        let error = HttpResponseError {
            code: 500,
            message: r#"{"error":"Internal Server Error"}"#.to_string(),
            request_id: Some("abc-123".to_string()),
        };
        assert_eq!(error.request_id, Some("abc-123".to_string()));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            request_id: None,
        };
        let _ = response_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid_error;
    }
}
