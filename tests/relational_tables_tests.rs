//! Integration tests for the relational-tables client, including the
//! compensating-read behavior of `delete`.

use maropost_api::{AccountId, AuthToken, MaropostConfig, RelationalTables};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> MaropostConfig {
    MaropostConfig::builder()
        .account_id(AccountId::new(1000).unwrap())
        .auth_token(AuthToken::new("test-token").unwrap())
        .api_base(format!("{}/accounts", server.uri()))
        .build()
        .unwrap()
}

fn record(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[tokio::test]
async fn test_get_targets_table_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/1000/subscribers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .expect(1)
        .mount(&server)
        .await;

    let table = RelationalTables::new(&test_config(&server), "subscribers");
    assert!(table.get().await.is_success());
}

#[tokio::test]
async fn test_set_table_name_switches_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/1000/other_table.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut table = RelationalTables::new(&test_config(&server), "subscribers");
    assert_eq!(table.table_name(), "subscribers");

    table.set_table_name("other_table");
    assert_eq!(table.table_name(), "other_table");
    assert!(table.get().await.is_success());
}

#[tokio::test]
async fn test_show_posts_identifying_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts/1000/subscribers/show.json"))
        .and(body_json(json!({"record": {"email": "a@b.com"}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": {"email": "a@b.com", "plan": "pro"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let table = RelationalTables::new(&test_config(&server), "subscribers");
    let result = table.show("email", "a@b.com").await;

    assert!(result.is_success());
}

#[tokio::test]
async fn test_create_wraps_fields_in_record_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts/1000/subscribers/create.json"))
        .and(body_json(
            json!({"record": {"email": "a@b.com", "score": 7}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"created": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let table = RelationalTables::new(&test_config(&server), "subscribers");
    let result = table
        .create(record(&[("email", json!("a@b.com")), ("score", json!(7))]))
        .await;

    assert!(result.is_success());
}

#[tokio::test]
async fn test_update_sends_record_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/accounts/1000/subscribers/update.json"))
        .and(body_json(json!({"record": {"id": 3, "plan": "free"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updated": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let table = RelationalTables::new(&test_config(&server), "subscribers");
    let result = table
        .update(record(&[("id", json!(3)), ("plan", json!("free"))]))
        .await;

    assert!(result.is_success());
}

#[tokio::test]
async fn test_upsert_sends_record_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/accounts/1000/subscribers/upsert.json"))
        .and(body_json(json!({"record": {"email": "a@b.com"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"upserted": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let table = RelationalTables::new(&test_config(&server), "subscribers");
    let result = table.upsert(record(&[("email", json!("a@b.com"))])).await;

    assert!(result.is_success());
}

#[tokio::test]
async fn test_delete_success_skips_compensating_read() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/accounts/1000/subscribers/delete.json"))
        .and(body_json(json!({"record": {"id": 42}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let table = RelationalTables::new(&test_config(&server), "subscribers");
    let result = table.delete("id", 42).await;

    assert!(result.is_success());
    // Exactly one round trip: no show call after a successful delete.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_of_missing_record_is_reclassified_from_show() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/accounts/1000/subscribers/delete.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "Unprocessable"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/accounts/1000/subscribers/show.json"))
        .and(body_json(json!({"record": {"id": 999}})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": {"error": "Record not found"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let table = RelationalTables::new(&test_config(&server), "subscribers");
    let result = table.delete("id", 999).await;

    // The show result comes back successful-shaped but carries the error
    // message from its payload.
    assert!(result.is_success());
    assert_eq!(result.error_message(), Some("Record not found"));
    assert_eq!(
        result.data(),
        Some(&json!({"result": {"error": "Record not found"}}))
    );
}

#[tokio::test]
async fn test_delete_failure_of_existing_record_returns_original_failure() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/accounts/1000/subscribers/delete.json"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"error": "permission denied"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    // The record exists, so show reports no error field.
    Mock::given(method("POST"))
        .and(path("/accounts/1000/subscribers/show.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": {"id": 42, "email": "a@b.com"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let table = RelationalTables::new(&test_config(&server), "subscribers");
    let result = table.delete("id", 42).await;

    assert!(!result.is_success());
    assert!(result.error_message().unwrap().contains("permission denied"));
}

#[tokio::test]
async fn test_delete_failure_with_failed_show_returns_original_failure() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/accounts/1000/subscribers/delete.json"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "server error"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/accounts/1000/subscribers/show.json"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "server error"})))
        .expect(1)
        .mount(&server)
        .await;

    let table = RelationalTables::new(&test_config(&server), "subscribers");
    let result = table.delete("id", 42).await;

    assert!(!result.is_success());
    assert!(result.error_message().unwrap().contains("server error"));
}
