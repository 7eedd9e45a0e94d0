//! HTTP client functionality for Maropost API communication.
//!
//! This module provides the transport layer used by the request engine:
//!
//! - [`HttpClient`]: async HTTP client with auth-token injection
//! - [`HttpRequest`]/[`HttpRequestBuilder`]: validated request construction
//! - [`HttpResponse`]: decoded response data
//! - [`HttpError`] and friends: typed transport errors
//!
//! Resource clients never touch this layer directly; they go through
//! [`ApiClient`](crate::api::ApiClient), which normalizes every error here
//! into a failed [`OperationResult`](crate::api::OperationResult).

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
