//! Client for the reports resource group.

use chrono::NaiveDate;

use crate::api::{discard_null_and_empty_values, ApiClient, OperationResult, ParamValue};
use crate::config::MaropostConfig;

/// Optional filter constraints shared by the report listing endpoints.
///
/// All fields default to "no filter". Dates render as `YYYY-MM-DD`; the
/// `fields` list renders comma-joined. Unset filters are dropped from the
/// query string entirely, but a `unique` filter of `false` is transmitted —
/// it means "include duplicates", not "no filter".
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use maropost_api::ReportFilter;
///
/// let filter = ReportFilter::default()
///     .from(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
///     .to(NaiveDate::from_ymd_opt(2023, 1, 31).unwrap())
///     .unique(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    fields: Vec<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    unique: Option<bool>,
    email: Option<String>,
    uid: Option<String>,
    per: Option<u32>,
}

impl ReportFilter {
    /// Plucks these contact fields from each record, if they exist.
    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Start of the date range filter.
    #[must_use]
    pub const fn from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// End of the date range filter.
    #[must_use]
    pub const fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// When `true`, gets only unique records.
    #[must_use]
    pub const fn unique(mut self, unique: bool) -> Self {
        self.unique = Some(unique);
        self
    }

    /// Filters by the contact's email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filters by the contact's UID.
    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Number of records to receive per request.
    #[must_use]
    pub const fn per(mut self, per: u32) -> Self {
        self.per = Some(per);
        self
    }
}

/// Renders a date filter as the `YYYY-MM-DD` form the API expects.
fn format_date(date: NaiveDate) -> ParamValue {
    ParamValue::from(date.format("%Y-%m-%d").to_string())
}

/// Assembles the sanitized query parameters for a filtered report listing.
///
/// The `fields` entry is always listed and relies on the sanitizer to drop it
/// when the joined list is empty; `bounce_type` is only meaningful for the
/// bounces endpoint.
fn filter_params(
    page: u32,
    filter: &ReportFilter,
    bounce_type: Option<&str>,
) -> Vec<(String, String)> {
    let mut params = vec![
        ("fields", Some(ParamValue::from(filter.fields.join(",")))),
        ("from", filter.from.map(format_date)),
        ("to", filter.to.map(format_date)),
        ("unique", filter.unique.map(ParamValue::from)),
        ("email", filter.email.clone().map(ParamValue::from)),
        ("uid", filter.uid.clone().map(ParamValue::from)),
    ];
    if bounce_type.is_some() {
        params.push(("type", bounce_type.map(ParamValue::from)));
    }
    params.push(("per", filter.per.map(ParamValue::from)));
    params.push(("page", Some(ParamValue::from(page))));

    discard_null_and_empty_values(params)
}

/// Client for report operations.
///
/// Covers the engagement report listings (opens, clicks, bounces,
/// unsubscribes, complaints), A/B test reports, and the journeys report.
#[derive(Debug)]
pub struct Reports {
    api: ApiClient,
}

impl Reports {
    /// Creates a reports client from the given configuration.
    #[must_use]
    pub fn new(config: &MaropostConfig) -> Self {
        Self {
            api: ApiClient::new(config, "reports"),
        }
    }

    /// Gets the list of reports.
    pub async fn get(&self, page: u32) -> OperationResult {
        self.api
            .get("", vec![("page".to_string(), page.to_string())])
            .await
    }

    /// Gets the report with the given ID.
    pub async fn get_report(&self, id: i64) -> OperationResult {
        self.api.get(&id.to_string(), Vec::new()).await
    }

    /// Gets the list of open reports matching the filter.
    pub async fn get_opens(&self, page: u32, filter: &ReportFilter) -> OperationResult {
        self.api.get("opens", filter_params(page, filter, None)).await
    }

    /// Gets the list of click reports matching the filter.
    pub async fn get_clicks(&self, page: u32, filter: &ReportFilter) -> OperationResult {
        self.api
            .get("clicks", filter_params(page, filter, None))
            .await
    }

    /// Gets the list of bounce reports matching the filter.
    ///
    /// `bounce_type` additionally restricts to a bounce class (e.g. `"hard"`
    /// or `"soft"`).
    pub async fn get_bounces(
        &self,
        page: u32,
        filter: &ReportFilter,
        bounce_type: Option<&str>,
    ) -> OperationResult {
        self.api
            .get("bounces", filter_params(page, filter, bounce_type))
            .await
    }

    /// Gets the list of unsubscribe reports matching the filter.
    pub async fn get_unsubscribes(&self, page: u32, filter: &ReportFilter) -> OperationResult {
        self.api
            .get("unsubscribes", filter_params(page, filter, None))
            .await
    }

    /// Gets the list of complaint reports matching the filter.
    pub async fn get_complaints(&self, page: u32, filter: &ReportFilter) -> OperationResult {
        self.api
            .get("complaints", filter_params(page, filter, None))
            .await
    }

    /// Gets the list of A/B test reports with the given name.
    ///
    /// This endpoint sits directly under the account rather than under
    /// `reports`, so the resource segment is overridden for the call.
    pub async fn get_ab_reports(
        &self,
        name: &str,
        page: u32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        per: Option<u32>,
    ) -> OperationResult {
        let params = discard_null_and_empty_values(vec![
            ("name", Some(ParamValue::from(name))),
            ("from", from.map(format_date)),
            ("to", to.map(format_date)),
            ("per", per.map(ParamValue::from)),
            ("page", Some(ParamValue::from(page))),
        ]);

        self.api.get_from_resource("ab_reports", params, "").await
    }

    /// Gets the list of all journeys.
    pub async fn get_journeys(&self, page: u32) -> OperationResult {
        self.api
            .get("journeys", vec![("page".to_string(), page.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_filter_params_with_date_range_only() {
        let filter = ReportFilter::default()
            .from(date(2023, 1, 1))
            .to(date(2023, 1, 31));
        let params = filter_params(1, &filter, None);

        assert_eq!(
            params,
            vec![
                ("from".to_string(), "2023-01-01".to_string()),
                ("to".to_string(), "2023-01-31".to_string()),
                ("page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_params_empty_filter_keeps_only_page() {
        let params = filter_params(3, &ReportFilter::default(), None);

        assert_eq!(params, vec![("page".to_string(), "3".to_string())]);
    }

    #[test]
    fn test_filter_params_joins_fields() {
        let filter = ReportFilter::default().fields(["first_name", "last_name"]);
        let params = filter_params(1, &filter, None);

        assert_eq!(params[0], ("fields".to_string(), "first_name,last_name".to_string()));
    }

    #[test]
    fn test_filter_params_preserves_false_unique() {
        let filter = ReportFilter::default().unique(false);
        let params = filter_params(1, &filter, None);

        assert!(params.contains(&("unique".to_string(), "false".to_string())));
    }

    #[test]
    fn test_filter_params_includes_bounce_type() {
        let filter = ReportFilter::default();
        let params = filter_params(1, &filter, Some("hard"));

        assert_eq!(
            params,
            vec![
                ("type".to_string(), "hard".to_string()),
                ("page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_params_full_ordering() {
        let filter = ReportFilter::default()
            .fields(["email"])
            .from(date(2023, 6, 1))
            .to(date(2023, 6, 30))
            .unique(true)
            .email("a@b.com")
            .uid("u-1")
            .per(25);
        let params = filter_params(2, &filter, Some("soft"));

        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["fields", "from", "to", "unique", "email", "uid", "type", "per", "page"]
        );
    }
}
