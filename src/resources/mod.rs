//! Resource clients for the Maropost API.
//!
//! Each client wraps one API resource group, fixes its URL path segment, and
//! exposes methods that validate and shape request payloads before delegating
//! to the shared request engine:
//!
//! - [`Journeys`]: list journeys and start/pause/reset them per contact
//! - [`RelationalTables`]: CRUD against a named relational table
//! - [`Reports`]: engagement report listings with filter constraints
//! - [`TransactionalCampaigns`]: campaign creation and email delivery

mod journeys;
mod relational_tables;
mod reports;
mod transactional_campaigns;

pub use journeys::Journeys;
pub use relational_tables::RelationalTables;
pub use reports::{ReportFilter, Reports};
pub use transactional_campaigns::{CampaignInput, SendEmail, TransactionalCampaigns};
