//! HTTP client for Maropost API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Maropost API.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::MaropostConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the query parameter carrying the auth token.
const AUTH_TOKEN_PARAM: &str = "auth_token";

/// HTTP client for making requests to the Maropost API.
///
/// The client handles:
/// - Base URI construction from the configured API base and account ID
/// - Default headers including User-Agent and Accept
/// - Auth-token injection as a query parameter on every request
/// - Response body decoding and non-2xx error serialization
///
/// Each call is exactly one HTTP round trip; the client performs no retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use maropost_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "journeys.json")
///     .query_param("page", "1")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI including the account segment
    /// (e.g., `https://api.maropost.com/accounts/1000`).
    base_uri: String,
    /// Auth token appended to every request's query string.
    auth_token: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &MaropostConfig) -> Self {
        let base_uri = format!("{}/{}", config.api_base(), config.account_id());

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Maropost API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            auth_token: config.auth_token().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Maropost API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction and auth-token injection
    /// - Header merging
    /// - Response body decoding
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path);
        tracing::debug!(method = %request.http_method, %url, "dispatching request");

        let mut req_builder = match request.http_method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
            crate::clients::http_request::HttpMethod::Put => self.client.put(&url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body_type) = &request.body_type {
            req_builder = req_builder.header("Content-Type", body_type.as_content_type());
        }

        // The auth token rides along as the last query parameter on every call.
        req_builder = req_builder.query(&request.query);
        req_builder = req_builder.query(&[(AUTH_TOKEN_PARAM, self.auth_token.as_str())]);

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| serde_json::json!({}))
        };

        let response = HttpResponse::new(code, headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let message = Self::serialize_error(&response);
        tracing::warn!(code, %message, "request failed");
        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            request_id: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response body to JSON format.
    ///
    /// Picks the `error`/`errors` fields out of the body when present; falls
    /// back to a generic status-code message so the caller always gets a
    /// populated error message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
        }
        if error_body.is_empty() {
            error_body.insert(
                "error".to_string(),
                serde_json::json!(format!("HTTP {}", response.code)),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
