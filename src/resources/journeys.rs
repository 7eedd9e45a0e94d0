//! Client for the journeys resource group.

use crate::api::{ApiClient, OperationResult};
use crate::config::MaropostConfig;

/// Client for journey operations.
///
/// Journeys are multi-step automated contact-engagement campaigns defined
/// server-side; this client lists them and starts, pauses, and resets them
/// for individual contacts.
///
/// # Example
///
/// ```rust,ignore
/// use maropost_api::Journeys;
///
/// let journeys = Journeys::new(&config);
/// let result = journeys.get(1).await;
/// if result.is_success() {
///     println!("{:?}", result.data());
/// }
/// ```
#[derive(Debug)]
pub struct Journeys {
    api: ApiClient,
}

// Verify Journeys is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Journeys>();
};

impl Journeys {
    /// Creates a journeys client from the given configuration.
    #[must_use]
    pub fn new(config: &MaropostConfig) -> Self {
        Self {
            api: ApiClient::new(config, "journeys"),
        }
    }

    /// Gets the list of journeys.
    ///
    /// `page` is 1-based; the server owns pagination semantics.
    pub async fn get(&self, page: u32) -> OperationResult {
        self.api
            .get("", vec![("page".to_string(), page.to_string())])
            .await
    }

    /// Gets the list of all campaigns for the specified journey.
    pub async fn get_campaigns(&self, journey_id: i64, page: u32) -> OperationResult {
        self.api
            .get(
                &format!("{journey_id}/journey_campaigns"),
                vec![("page".to_string(), page.to_string())],
            )
            .await
    }

    /// Gets the list of all contacts for the specified journey.
    pub async fn get_contacts(&self, journey_id: i64, page: u32) -> OperationResult {
        self.api
            .get(
                &format!("{journey_id}/journey_contacts"),
                vec![("page".to_string(), page.to_string())],
            )
            .await
    }

    /// Stops all journeys, filtered for the matching parameters.
    ///
    /// The `contact_id` filter is ignored unless greater than 0; the
    /// `recipient_email` and `uid` filters are ignored when `None`.
    pub async fn stop_all(
        &self,
        contact_id: i64,
        recipient_email: Option<&str>,
        uid: Option<&str>,
        page: u32,
    ) -> OperationResult {
        let mut params = Vec::new();
        if contact_id > 0 {
            params.push(("contact_id".to_string(), contact_id.to_string()));
        }
        if let Some(email) = recipient_email {
            params.push(("email".to_string(), email.to_string()));
        }
        if let Some(uid) = uid {
            params.push(("uid".to_string(), uid.to_string()));
        }
        params.push(("page".to_string(), page.to_string()));

        self.api.put("stop_all_journeys", params, None).await
    }

    /// Pauses the specified journey for the specified contact.
    pub async fn pause_journey_for_contact(
        &self,
        journey_id: i64,
        contact_id: i64,
    ) -> OperationResult {
        self.api
            .put(&format!("{journey_id}/stop/{contact_id}"), Vec::new(), None)
            .await
    }

    /// Pauses the specified journey for the contact having the specified UID.
    pub async fn pause_journey_for_uid(&self, journey_id: i64, uid: &str) -> OperationResult {
        self.api
            .put(
                &format!("{journey_id}/stop/uid"),
                vec![("uid".to_string(), uid.to_string())],
                None,
            )
            .await
    }

    /// Resets the specified journey for the specified active/paused contact.
    ///
    /// Resetting a contact to the beginning of the journey results in sending
    /// of the same journey campaigns as originally sent.
    pub async fn reset_journey_for_contact(
        &self,
        journey_id: i64,
        contact_id: i64,
    ) -> OperationResult {
        self.api
            .put(&format!("{journey_id}/reset/{contact_id}"), Vec::new(), None)
            .await
    }

    /// Resets the specified journey for the active/paused contact having the
    /// specified UID.
    pub async fn reset_journey_for_uid(&self, journey_id: i64, uid: &str) -> OperationResult {
        self.api
            .put(
                &format!("{journey_id}/reset/uid"),
                vec![("uid".to_string(), uid.to_string())],
                None,
            )
            .await
    }

    /// Restarts a journey for a paused contact, or adds a new contact to the
    /// journey.
    ///
    /// Retriggers the journey for a contact who has finished it once; the
    /// journey's "Retrigger Journey" option must be enabled for that.
    pub async fn start_journey_for_contact(
        &self,
        journey_id: i64,
        contact_id: i64,
    ) -> OperationResult {
        self.api
            .put(&format!("{journey_id}/start/{contact_id}"), Vec::new(), None)
            .await
    }

    /// Restarts a journey for a paused contact having the specified UID.
    pub async fn start_journey_for_uid(&self, journey_id: i64, uid: &str) -> OperationResult {
        self.api
            .put(
                &format!("{journey_id}/start/uid"),
                vec![("uid".to_string(), uid.to_string())],
                None,
            )
            .await
    }
}
