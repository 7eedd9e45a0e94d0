//! Client for relational-table records.

use serde_json::{json, Map, Value};

use crate::api::{ApiClient, OperationResult};
use crate::config::MaropostConfig;

/// Client for one relational table.
///
/// Relational tables are user-defined, schema-flexible record stores exposed
/// by the API and addressed by table name. The table name doubles as the
/// resource path segment; it can be switched between calls with
/// [`set_table_name`](Self::set_table_name).
///
/// Record field sets are passed as [`serde_json::Map`]s of field name to
/// scalar value; the map is wrapped into the `{"record": {...}}` envelope the
/// API expects.
///
/// # Example
///
/// ```rust,ignore
/// use maropost_api::RelationalTables;
/// use serde_json::{json, Map};
///
/// let mut table = RelationalTables::new(&config, "subscribers");
///
/// let mut fields = Map::new();
/// fields.insert("email".to_string(), json!("contact@example.com"));
/// fields.insert("score".to_string(), json!(7));
/// let result = table.create(fields).await;
/// ```
#[derive(Debug)]
pub struct RelationalTables {
    api: ApiClient,
}

impl RelationalTables {
    /// Creates a client acting against the named table.
    #[must_use]
    pub fn new(config: &MaropostConfig, table_name: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(config, table_name),
        }
    }

    /// Returns the name of the table this client is acting against.
    #[must_use]
    pub fn table_name(&self) -> &str {
        self.api.resource()
    }

    /// Switches which table this client acts against for successive calls.
    ///
    /// Takes `&mut self` so the switch cannot race an in-flight call on the
    /// same instance.
    pub fn set_table_name(&mut self, table_name: impl Into<String>) {
        self.api.set_resource(table_name);
    }

    /// Gets the records of the relational table.
    pub async fn get(&self) -> OperationResult {
        self.api.get("", Vec::new()).await
    }

    /// Gets the specified record from the relational table.
    ///
    /// `id_field` names the field representing the unique identifier (e.g.,
    /// `"id"`, `"email"`); `id_value` is that field's value for the record to
    /// get. The API treats "show" as a filtered query, so this is a POST of
    /// the identifying record rather than a path-parameterized GET.
    pub async fn show(&self, id_field: &str, id_value: impl Into<Value>) -> OperationResult {
        let id_value: Value = id_value.into();
        let body = json!({ "record": { id_field: id_value } });
        self.api.post("show", Vec::new(), body).await
    }

    /// Adds a record to the relational table.
    pub async fn create(&self, fields: Map<String, Value>) -> OperationResult {
        self.api
            .post("create", Vec::new(), json!({ "record": fields }))
            .await
    }

    /// Updates a record in the relational table.
    ///
    /// Any date/time strings must be in one of three formats: `MM/DD/YYYY`,
    /// `YYYY-MM-DD`, or `YYYY-MM-DDThh:mm:ssTZD`.
    pub async fn update(&self, fields: Map<String, Value>) -> OperationResult {
        self.api
            .put("update", Vec::new(), Some(json!({ "record": fields })))
            .await
    }

    /// Creates or updates a record in the relational table.
    ///
    /// Any date/time strings must be in one of three formats: `MM/DD/YYYY`,
    /// `YYYY-MM-DD`, or `YYYY-MM-DDThh:mm:ssTZD`.
    pub async fn upsert(&self, fields: Map<String, Value>) -> OperationResult {
        self.api
            .put("upsert", Vec::new(), Some(json!({ "record": fields })))
            .await
    }

    /// Deletes the given record of the relational table.
    ///
    /// When the delete call fails, a compensating read distinguishes "record
    /// does not exist" from a genuine delete failure: `show` is called on the
    /// same key, and if it succeeds with an `error` field in its payload, the
    /// show result is returned with that error surfaced as the message.
    /// Any other failure returns the original delete result unchanged.
    pub async fn delete(&self, id_field: &str, id_value: impl Into<Value>) -> OperationResult {
        let id_value: Value = id_value.into();
        let record = json!({ "record": { id_field: id_value.clone() } });

        let result = self
            .api
            .delete("delete", Vec::new(), None, Some(record))
            .await;
        if result.is_success() {
            return result;
        }

        // First check and ensure the record exists before reporting a failure.
        let show_result = self.show(id_field, id_value).await;
        if show_result.is_success() {
            if let Some(error) = show_result.data().and_then(extract_error_field) {
                // Not *really* an error, the record just doesn't exist.
                return show_result.clone().with_error_message(error);
            }
        }

        result
    }
}

/// Pulls the `error` field out of a show payload.
///
/// The API nests it under `result` (`{"result": {"error": "..."}}`); a bare
/// top-level `error` is accepted too.
fn extract_error_field(payload: &Value) -> Option<String> {
    let container = payload.get("result").unwrap_or(payload);
    container.get("error").map(|error| {
        error
            .as_str()
            .map_or_else(|| error.to_string(), ToString::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_field_nested_under_result() {
        let payload = json!({"result": {"error": "Record not found"}});
        assert_eq!(
            extract_error_field(&payload),
            Some("Record not found".to_string())
        );
    }

    #[test]
    fn test_extract_error_field_top_level() {
        let payload = json!({"error": "Record not found"});
        assert_eq!(
            extract_error_field(&payload),
            Some("Record not found".to_string())
        );
    }

    #[test]
    fn test_extract_error_field_absent() {
        let payload = json!({"result": {"id": 42, "email": "a@b.com"}});
        assert_eq!(extract_error_field(&payload), None);
    }

    #[test]
    fn test_extract_error_field_non_string_error() {
        let payload = json!({"result": {"error": {"code": 404}}});
        assert_eq!(
            extract_error_field(&payload),
            Some(r#"{"code":404}"#.to_string())
        );
    }
}
