//! Client for transactional campaigns and email delivery.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

use crate::api::{ApiClient, OperationResult};
use crate::config::MaropostConfig;

/// One well-formed-email check shared by the recipient and BCC validations.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

fn is_well_formed_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn is_scalar(value: &Value) -> bool {
    value.is_string() || value.is_number() || value.is_boolean()
}

/// Checks that every key is a non-numeric string and every value a non-null
/// scalar. `what` names the offending map in the error message.
fn validate_string_keyed_scalars(map: &Map<String, Value>, what: &str) -> Result<(), String> {
    for (key, value) in map {
        if key.parse::<f64>().is_ok() {
            return Err(format!("All keys in your {what} map must be non-numeric strings."));
        }
        if !is_scalar(value) {
            return Err(format!(
                "All values in your {what} map must be non-null scalars (string, number, bool)."
            ));
        }
    }
    Ok(())
}

/// Input fields for creating a transactional campaign.
///
/// # Example
///
/// ```rust
/// use maropost_api::CampaignInput;
///
/// let campaign = CampaignInput {
///     name: "Order confirmation".to_string(),
///     subject: "Your order".to_string(),
///     preheader: "Thanks for your order".to_string(),
///     from_name: "Acme".to_string(),
///     from_email: "orders@acme.example".to_string(),
///     reply_to: "support@acme.example".to_string(),
///     content_id: 42,
///     email_preview_link: true,
///     address: "1 Main St".to_string(),
///     language: "en".to_string(),
///     ctags: vec!["orders".to_string()],
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CampaignInput {
    /// Campaign name.
    pub name: String,
    /// Campaign subject.
    pub subject: String,
    /// Campaign preheader.
    pub preheader: String,
    /// Sender name in the email.
    pub from_name: String,
    /// Sender email address.
    pub from_email: String,
    /// Reply-to email address.
    pub reply_to: String,
    /// ID of the content to attach.
    pub content_id: i64,
    /// Whether to include an email preview link.
    pub email_preview_link: bool,
    /// Physical address of the sender.
    pub address: String,
    /// ISO 639-1 language code.
    pub language: String,
    /// Campaign tags; attached only when non-empty.
    pub ctags: Vec<String>,
}

/// Options for sending a transactional campaign email.
///
/// Sender information is automatically fetched from the transactional
/// campaign unless overridden here. Every setter is optional except the
/// campaign ID; unset sections are omitted from the delivery payload.
///
/// # Example
///
/// ```rust
/// use maropost_api::SendEmail;
///
/// let email = SendEmail::new(12)
///     .recipient_email("contact@example.com")
///     .recipient_first_name("Ada")
///     .subject("Welcome!")
///     .send_at_hour(9);
/// ```
#[derive(Debug, Clone)]
pub struct SendEmail {
    campaign_id: i64,
    content_id: Option<i64>,
    content_name: Option<String>,
    content_html_part: Option<String>,
    content_text_part: Option<String>,
    send_at_hour: Option<i32>,
    send_at_minute: Option<i32>,
    ignore_dnm: bool,
    contact_id: Option<i64>,
    recipient_email: Option<String>,
    recipient_first_name: Option<String>,
    recipient_last_name: Option<String>,
    recipient_custom_fields: Option<Map<String, Value>>,
    bcc_email: Option<String>,
    from_name: Option<String>,
    from_email: Option<String>,
    subject: Option<String>,
    reply_to: Option<String>,
    sender_address: Option<String>,
    tags: Option<Map<String, Value>>,
    ctags: Vec<Value>,
}

impl SendEmail {
    /// Starts a delivery for the given campaign.
    ///
    /// The campaign must already exist; create one first if needed.
    #[must_use]
    pub const fn new(campaign_id: i64) -> Self {
        Self {
            campaign_id,
            content_id: None,
            content_name: None,
            content_html_part: None,
            content_text_part: None,
            send_at_hour: None,
            send_at_minute: None,
            ignore_dnm: false,
            contact_id: None,
            recipient_email: None,
            recipient_first_name: None,
            recipient_last_name: None,
            recipient_custom_fields: None,
            bcc_email: None,
            from_name: None,
            from_email: None,
            subject: None,
            reply_to: None,
            sender_address: None,
            tags: None,
            ctags: Vec::new(),
        }
    }

    /// Replaces the campaign's content with this content ID.
    ///
    /// Mutually exclusive with the explicit content fields.
    #[must_use]
    pub const fn content_id(mut self, content_id: i64) -> Self {
        self.content_id = Some(content_id);
        self
    }

    /// Replaces the campaign's content name.
    #[must_use]
    pub fn content_name(mut self, name: impl Into<String>) -> Self {
        self.content_name = Some(name.into());
        self
    }

    /// Replaces the campaign content's HTML part.
    #[must_use]
    pub fn content_html_part(mut self, html: impl Into<String>) -> Self {
        self.content_html_part = Some(html.into());
        self
    }

    /// Replaces the campaign content's text part.
    #[must_use]
    pub fn content_text_part(mut self, text: impl Into<String>) -> Self {
        self.content_text_part = Some(text.into());
        self
    }

    /// Hour of day to send at. Honored only when in 1–12; otherwise the
    /// email goes out immediately.
    #[must_use]
    pub const fn send_at_hour(mut self, hour: i32) -> Self {
        self.send_at_hour = Some(hour);
        self
    }

    /// Minute to send at. Treated as 0 unless in 0–60.
    #[must_use]
    pub const fn send_at_minute(mut self, minute: i32) -> Self {
        self.send_at_minute = Some(minute);
        self
    }

    /// Ignores the Do Not Mail list for the recipient contact.
    #[must_use]
    pub const fn ignore_dnm(mut self, ignore: bool) -> Self {
        self.ignore_dnm = ignore;
        self
    }

    /// Contact ID of the recipient. When set, the recipient email/name
    /// fields are ignored.
    #[must_use]
    pub const fn contact_id(mut self, contact_id: i64) -> Self {
        self.contact_id = Some(contact_id);
        self
    }

    /// Recipient email address. Required (and validated) when no contact ID
    /// is set.
    #[must_use]
    pub fn recipient_email(mut self, email: impl Into<String>) -> Self {
        self.recipient_email = Some(email.into());
        self
    }

    /// Recipient's first name.
    #[must_use]
    pub fn recipient_first_name(mut self, name: impl Into<String>) -> Self {
        self.recipient_first_name = Some(name.into());
        self
    }

    /// Recipient's last name.
    #[must_use]
    pub fn recipient_last_name(mut self, name: impl Into<String>) -> Self {
        self.recipient_last_name = Some(name.into());
        self
    }

    /// Custom fields for the recipient. Keys must be non-numeric strings and
    /// values non-null scalars.
    #[must_use]
    pub fn recipient_custom_fields(mut self, fields: Map<String, Value>) -> Self {
        self.recipient_custom_fields = Some(fields);
        self
    }

    /// BCC recipient. A single email address; validated when non-empty.
    #[must_use]
    pub fn bcc_email(mut self, email: impl Into<String>) -> Self {
        self.bcc_email = Some(email.into());
        self
    }

    /// Sender's name. Only honored together with a sender email override.
    #[must_use]
    pub fn from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self
    }

    /// Sender's email address. Overrides the campaign default sender.
    #[must_use]
    pub fn from_email(mut self, email: impl Into<String>) -> Self {
        self.from_email = Some(email.into());
        self
    }

    /// Subject line override.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Reply-to address override.
    #[must_use]
    pub fn reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Physical sender address override.
    #[must_use]
    pub fn sender_address(mut self, address: impl Into<String>) -> Self {
        self.sender_address = Some(address.into());
        self
    }

    /// Content tag replacements: tag name to replacement value. Keys must be
    /// non-numeric strings and values non-null scalars.
    #[must_use]
    pub fn tags(mut self, tags: Map<String, Value>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Campaign tags to add. Values must be scalars.
    #[must_use]
    pub fn ctags(mut self, ctags: Vec<Value>) -> Self {
        self.ctags = ctags;
        self
    }
}

/// Client for transactional campaign operations.
///
/// A transactional campaign is a single-email-send template plus delivery
/// configuration; [`send_email`](Self::send_email) dispatches one email
/// through such a campaign.
#[derive(Debug)]
pub struct TransactionalCampaigns {
    api: ApiClient,
}

impl TransactionalCampaigns {
    const RESOURCE: &'static str = "transactional_campaigns";

    /// Creates a transactional-campaigns client from the given configuration.
    #[must_use]
    pub fn new(config: &MaropostConfig) -> Self {
        Self {
            api: ApiClient::new(config, Self::RESOURCE),
        }
    }

    /// Gets the list of transactional campaigns.
    pub async fn get(&self, page: u32) -> OperationResult {
        self.api
            .get("", vec![("page".to_string(), page.to_string())])
            .await
    }

    /// Creates a transactional campaign.
    pub async fn create(&self, input: CampaignInput) -> OperationResult {
        let mut campaign = Map::new();
        campaign.insert("name".to_string(), json!(input.name));
        campaign.insert("subject".to_string(), json!(input.subject));
        campaign.insert("preheader".to_string(), json!(input.preheader));
        campaign.insert("from_name".to_string(), json!(input.from_name));
        campaign.insert("from_email".to_string(), json!(input.from_email));
        campaign.insert("reply_to".to_string(), json!(input.reply_to));
        // The API expects the content ID as a string here.
        campaign.insert("content_id".to_string(), json!(input.content_id.to_string()));
        campaign.insert(
            "email_preview_link".to_string(),
            json!(input.email_preview_link),
        );
        campaign.insert("address".to_string(), json!(input.address));
        campaign.insert("language".to_string(), json!(input.language));
        if !input.ctags.is_empty() {
            campaign.insert("add_ctags".to_string(), json!(input.ctags));
        }

        self.api
            .post("", Vec::new(), json!({ "campaign": campaign }))
            .await
    }

    /// Sends a transactional campaign email to a recipient.
    ///
    /// Every rule below is checked locally before any network I/O; a
    /// violation returns a failed result without touching the transport:
    ///
    /// - a content ID and explicit content fields are mutually exclusive
    /// - without a contact ID, the recipient email must be well-formed
    /// - custom-field and tag keys must be non-numeric strings, their values
    ///   non-null scalars
    /// - a non-empty BCC address must be well-formed
    /// - campaign tag values must be scalars
    ///
    /// An out-of-range `send_at_hour` is not an error: the schedule section
    /// is simply omitted and the email goes out immediately.
    ///
    /// On success this posts the delivery under the `emails` resource root,
    /// not the client's own `transactional_campaigns` segment.
    pub async fn send_email(&self, email: SendEmail) -> OperationResult {
        let mut payload = Map::new();
        payload.insert("campaign_id".to_string(), json!(email.campaign_id));

        let has_content_fields = email.content_name.is_some()
            || email.content_html_part.is_some()
            || email.content_text_part.is_some();
        if let Some(content_id) = email.content_id {
            if has_content_fields {
                return OperationResult::err(
                    "You may provide EITHER a content_id OR content field values, but not both.",
                );
            }
            payload.insert("content_id".to_string(), json!(content_id));
        } else if has_content_fields {
            payload.insert(
                "content".to_string(),
                json!({
                    "name": email.content_name,
                    "html_part": email.content_html_part,
                    "text_part": email.content_text_part,
                }),
            );
        }

        if let Some(contact_id) = email.contact_id {
            payload.insert("contact_id".to_string(), json!(contact_id));
        } else {
            let recipient = email.recipient_email.as_deref().unwrap_or("");
            if !is_well_formed_email(recipient) {
                return OperationResult::err(
                    "You must provide a well-formed recipient_email because contact_id is not set.",
                );
            }
            payload.insert(
                "contact".to_string(),
                json!({
                    "email": recipient,
                    "first_name": email.recipient_first_name,
                    "last_name": email.recipient_last_name,
                }),
            );
            if let Some(custom_fields) = email.recipient_custom_fields {
                if let Err(message) =
                    validate_string_keyed_scalars(&custom_fields, "recipient_custom_fields")
                {
                    return OperationResult::err(message);
                }
                payload.insert("custom_field".to_string(), Value::Object(custom_fields));
            }
        }

        if let Some(hour) = email.send_at_hour {
            if (1..=12).contains(&hour) {
                let minute = email
                    .send_at_minute
                    .filter(|minute| (0..=60).contains(minute))
                    .unwrap_or(0);
                payload.insert(
                    "send_time".to_string(),
                    json!({ "hour": hour.to_string(), "minute": minute.to_string() }),
                );
            }
        }

        if email.ignore_dnm {
            payload.insert("ignore_dnm".to_string(), json!(true));
        }

        if let Some(from_email) = email.from_email.filter(|email| !email.is_empty()) {
            payload.insert("from_email".to_string(), json!(from_email));
            payload.insert("from_name".to_string(), json!(email.from_name));
        }
        if let Some(reply_to) = email.reply_to.filter(|value| !value.is_empty()) {
            payload.insert("reply_to".to_string(), json!(reply_to));
        }
        if let Some(subject) = email.subject.filter(|value| !value.is_empty()) {
            payload.insert("subject".to_string(), json!(subject));
        }
        if let Some(address) = email.sender_address.filter(|value| !value.is_empty()) {
            payload.insert("address".to_string(), json!(address));
        }

        if let Some(bcc) = email.bcc_email.filter(|value| !value.is_empty()) {
            if !is_well_formed_email(&bcc) {
                return OperationResult::err(
                    "When providing a bcc_email, it needs to be a well-formed email address.",
                );
            }
            payload.insert("bcc".to_string(), json!(bcc));
        }

        if let Some(tags) = email.tags.filter(|tags| !tags.is_empty()) {
            if let Err(message) = validate_string_keyed_scalars(&tags, "tags") {
                return OperationResult::err(message);
            }
            payload.insert("tags".to_string(), Value::Object(tags));
        }

        if !email.ctags.is_empty() {
            if email.ctags.iter().any(|value| !is_scalar(value)) {
                return OperationResult::err(
                    "All values in your ctags list must be non-null scalars (string, number, bool).",
                );
            }
            payload.insert("add_ctags".to_string(), json!(email.ctags));
        }

        self.api
            .post_to_resource("deliver", Vec::new(), json!({ "email": payload }), "emails")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_emails_pass() {
        assert!(is_well_formed_email("user@example.com"));
        assert!(is_well_formed_email("first.last+tag@sub.example.co.uk"));
    }

    #[test]
    fn test_malformed_emails_fail() {
        assert!(!is_well_formed_email(""));
        assert!(!is_well_formed_email("not-an-email"));
        assert!(!is_well_formed_email("user@"));
        assert!(!is_well_formed_email("@example.com"));
        assert!(!is_well_formed_email("user@example"));
        assert!(!is_well_formed_email("user name@example.com"));
    }

    #[test]
    fn test_scalar_values_pass_validation() {
        let mut map = Map::new();
        map.insert("city".to_string(), json!("Toronto"));
        map.insert("score".to_string(), json!(7.5));
        map.insert("active".to_string(), json!(true));

        assert!(validate_string_keyed_scalars(&map, "tags").is_ok());
    }

    #[test]
    fn test_numeric_key_fails_validation() {
        let mut map = Map::new();
        map.insert("42".to_string(), json!("value"));

        let error = validate_string_keyed_scalars(&map, "tags").unwrap_err();
        assert!(error.contains("non-numeric strings"));
    }

    #[test]
    fn test_non_scalar_value_fails_validation() {
        let mut map = Map::new();
        map.insert("nested".to_string(), json!({"inner": 1}));

        let error = validate_string_keyed_scalars(&map, "recipient_custom_fields").unwrap_err();
        assert!(error.contains("non-null scalars"));
    }

    #[test]
    fn test_null_value_fails_validation() {
        let mut map = Map::new();
        map.insert("empty".to_string(), Value::Null);

        assert!(validate_string_keyed_scalars(&map, "tags").is_err());
    }
}
