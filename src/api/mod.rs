//! The shared request engine composed by every resource client.
//!
//! [`ApiClient`] centralizes URL construction, auth-token injection,
//! parameter handling, HTTP dispatch, and uniform success/error wrapping.
//! Resource clients hold an `ApiClient`, set their resource path segment, and
//! delegate to its `get`/`post`/`put`/`delete` primitives.
//!
//! The engine's central contract: **no transport error escapes**. Network
//! failures, non-2xx statuses, and JSON-decode failures are all converted
//! into an [`OperationResult`] with `is_success() == false` and a populated
//! error message.

mod params;
mod result;

pub use params::{discard_null_and_empty_values, ParamValue};
pub use result::{GetResult, OperationResult};

use serde_json::Value;

use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError,
};
use crate::config::MaropostConfig;

/// The request engine shared by all resource clients.
///
/// Holds the HTTP client and the resource path segment. The resource segment
/// determines the URL root for every call
/// (`{api_base}/{account_id}/{resource}/...`); individual calls may override
/// it for endpoints that live under a different root.
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    resource: String,
}

impl ApiClient {
    /// Creates a request engine bound to the given resource segment.
    #[must_use]
    pub fn new(config: &MaropostConfig, resource: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(config),
            resource: resource.into(),
        }
    }

    /// Returns the resource path segment this engine targets.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Replaces the resource path segment for successive calls.
    pub fn set_resource(&mut self, resource: impl Into<String>) {
        self.resource = resource.into();
    }

    /// Issues a GET to `{resource}/{path}` with the given query parameters.
    pub async fn get(&self, path: &str, params: Vec<(String, String)>) -> OperationResult {
        self.dispatch(HttpMethod::Get, path, params, None, None)
            .await
    }

    /// Issues a GET with the resource segment overridden for this call only.
    ///
    /// Used for endpoints not nested under the client's resource root, such
    /// as `ab_reports`, which sits directly under the account.
    pub async fn get_from_resource(
        &self,
        path: &str,
        params: Vec<(String, String)>,
        resource: &str,
    ) -> OperationResult {
        self.dispatch(HttpMethod::Get, path, params, None, Some(resource))
            .await
    }

    /// Issues a POST with a JSON body.
    pub async fn post(
        &self,
        path: &str,
        params: Vec<(String, String)>,
        body: Value,
    ) -> OperationResult {
        self.dispatch(HttpMethod::Post, path, params, Some(body), None)
            .await
    }

    /// Issues a POST with the resource segment overridden for this call only.
    ///
    /// Used when an endpoint lives under a different resource root, such as
    /// transactional email delivery, which posts to `emails/deliver` rather
    /// than `transactional_campaigns/deliver`.
    pub async fn post_to_resource(
        &self,
        path: &str,
        params: Vec<(String, String)>,
        body: Value,
        resource: &str,
    ) -> OperationResult {
        self.dispatch(HttpMethod::Post, path, params, Some(body), Some(resource))
            .await
    }

    /// Issues a PUT. The body is optional: several journey operations are
    /// bodyless PUTs addressed purely by path and query parameters.
    pub async fn put(
        &self,
        path: &str,
        params: Vec<(String, String)>,
        body: Option<Value>,
    ) -> OperationResult {
        self.dispatch(HttpMethod::Put, path, params, body, None)
            .await
    }

    /// Issues a DELETE.
    ///
    /// `record` is the record-identifying secondary payload used by the
    /// relational-table delete operation. When present it is merged over the
    /// body (or becomes the body if none was given).
    pub async fn delete(
        &self,
        path: &str,
        params: Vec<(String, String)>,
        body: Option<Value>,
        record: Option<Value>,
    ) -> OperationResult {
        let body = merge_payloads(body, record);
        self.dispatch(HttpMethod::Delete, path, params, body, None)
            .await
    }

    /// Builds, dispatches, and wraps one HTTP round trip.
    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        params: Vec<(String, String)>,
        body: Option<Value>,
        resource_override: Option<&str>,
    ) -> OperationResult {
        let resource = resource_override.unwrap_or(self.resource.as_str());
        let full_path = match build_path(resource, path) {
            Ok(p) => p,
            Err(e) => return OperationResult::err(e.to_string()),
        };

        let mut builder = HttpRequest::builder(method, full_path).query(params);
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        let request = match builder.build() {
            Ok(r) => r,
            Err(e) => return OperationResult::err(e.to_string()),
        };

        match self.http.request(request).await {
            Ok(response) => OperationResult::ok(Some(response.body)),
            Err(HttpError::Response(e)) => OperationResult::err(e.message),
            Err(e) => OperationResult::err(e.to_string()),
        }
    }
}

/// Joins the resource segment and path suffix and appends the `.json`
/// extension the API expects on every endpoint.
fn build_path(resource: &str, suffix: &str) -> Result<String, InvalidHttpRequestError> {
    let resource = resource.trim_matches('/');
    let suffix = suffix.trim_matches('/');

    let joined = match (resource.is_empty(), suffix.is_empty()) {
        (true, true) => return Err(InvalidHttpRequestError::EmptyPath),
        (false, true) => resource.to_string(),
        (true, false) => suffix.to_string(),
        (false, false) => format!("{resource}/{suffix}"),
    };

    Ok(format!("{joined}.json"))
}

/// Merges the record-identifying payload over the body.
fn merge_payloads(body: Option<Value>, record: Option<Value>) -> Option<Value> {
    match (body, record) {
        (body, None) => body,
        (None, Some(record)) => Some(record),
        (Some(mut body), Some(record)) => {
            if let (Some(base), Some(extra)) = (body.as_object_mut(), record.as_object()) {
                for (key, value) in extra {
                    base.insert(key.clone(), value.clone());
                }
                Some(body)
            } else {
                Some(record)
            }
        }
    }
}
