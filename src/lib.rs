//! # Maropost API Rust SDK
//!
//! A Rust SDK for the Maropost marketing automation API, covering journeys,
//! relational tables, reports, and transactional campaigns.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MaropostConfig`] and [`MaropostConfigBuilder`]
//! - Validated newtypes for API credentials ([`AccountId`], [`AuthToken`])
//! - A shared request engine ([`api::ApiClient`]) that centralizes URL
//!   construction, auth-token injection, parameter sanitization, HTTP
//!   dispatch, and uniform success/error wrapping
//! - Resource clients ([`Journeys`], [`RelationalTables`], [`Reports`],
//!   [`TransactionalCampaigns`]) with pre-request input validation
//!
//! ## Quick Start
//!
//! ```rust
//! use maropost_api::{AccountId, AuthToken, MaropostConfig};
//!
//! let config = MaropostConfig::builder()
//!     .account_id(AccountId::new(1000).unwrap())
//!     .auth_token(AuthToken::new("your-auth-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Listing Journeys
//!
//! ```rust,ignore
//! use maropost_api::Journeys;
//!
//! let journeys = Journeys::new(&config);
//! let result = journeys.get(1).await;
//! if result.is_success() {
//!     println!("{:?}", result.data());
//! } else {
//!     eprintln!("{}", result.error_message().unwrap_or_default());
//! }
//! ```
//!
//! ## Working with Relational Tables
//!
//! ```rust,ignore
//! use maropost_api::RelationalTables;
//! use serde_json::{json, Map};
//!
//! let mut table = RelationalTables::new(&config, "subscribers");
//!
//! let mut fields = Map::new();
//! fields.insert("email".to_string(), json!("contact@example.com"));
//! fields.insert("plan".to_string(), json!("pro"));
//! let created = table.upsert(fields).await;
//!
//! // Switch tables between calls
//! table.set_table_name("churned_subscribers");
//! let records = table.get().await;
//! ```
//!
//! ## Sending a Transactional Email
//!
//! ```rust,ignore
//! use maropost_api::{SendEmail, TransactionalCampaigns};
//!
//! let campaigns = TransactionalCampaigns::new(&config);
//! let result = campaigns
//!     .send_email(
//!         SendEmail::new(12)
//!             .recipient_email("contact@example.com")
//!             .subject("Welcome!")
//!             .send_at_hour(9),
//!     )
//!     .await;
//! ```
//!
//! ## Result Handling
//!
//! Every resource method returns an [`OperationResult`]: a success flag, an
//! optional error message, and the decoded JSON payload. Local validation
//! failures (malformed email, conflicting content arguments, non-scalar
//! field values) short-circuit before any network I/O; transport and server
//! failures are normalized into the same shape. No error type is thrown
//! across the client boundary.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Uniform results**: One result shape for every call, no escaping errors

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use api::{discard_null_and_empty_values, ApiClient, GetResult, OperationResult, ParamValue};
pub use config::{AccountId, AuthToken, MaropostConfig, MaropostConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export resource clients
pub use resources::{
    CampaignInput, Journeys, RelationalTables, ReportFilter, Reports, SendEmail,
    TransactionalCampaigns,
};
