use super::*;

/// Tests that the default scope is sent and caller values override it.
///
/// Expected: one `fields` directive carrying the override, cohort filter kept
#[tokio::test]
async fn fetch_items_applies_defaults_and_overrides() {
    let test = TestBuilder::new()
        .with_persons(vec![fixture::person::entity()])
        .build()
        .await
        .unwrap();
    let client = client_for(&test);

    let overrides = QueryParams::new()
        .with("fields", "*,role.role_id.name")
        .with("limit", "-1");
    let data = client.fetch_items("person", overrides).await;

    assert_eq!(data, json!([fixture::person::entity()]));

    let queries = test.received_queries("/items/person").await;
    assert_eq!(queries.len(), 1);
    let query = &queries[0];
    assert_eq!(query_count(query, "fields"), 1);
    assert_eq!(query_value(query, "fields"), Some("*,role.role_id.name"));
    assert_eq!(query_value(query, "filter[squads][squad_id][cohort]"), Some("2526"));
    assert_eq!(query_value(query, "limit"), Some("-1"));
}

/// Tests that values with spaces and reserved characters survive encoding.
#[tokio::test]
async fn fetch_items_encodes_values() {
    let test = TestBuilder::new()
        .with_persons(vec![])
        .build()
        .await
        .unwrap();
    let client = client_for(&test);

    let overrides = QueryParams::new().with("filter[name][_icontains]", "Jan & Piet = 100%");
    client.fetch_items("person", overrides).await;

    let queries = test.received_queries("/items/person").await;
    assert_eq!(
        query_value(&queries[0], "filter[name][_icontains]"),
        Some("Jan & Piet = 100%")
    );
}

/// Tests that a single-item endpoint yields the object unchanged.
#[tokio::test]
async fn fetch_unscoped_returns_single_object() {
    let test = TestBuilder::new()
        .with_response(
            "person/7",
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 7, "name": "Ada" } })),
        )
        .build()
        .await
        .unwrap();
    let client = client_for(&test);

    let data = client.fetch_unscoped("person/7", &QueryParams::new()).await;

    assert_eq!(data, json!({ "id": 7, "name": "Ada" }));
    assert_eq!(test.received_queries("/items/person/7").await, vec![vec![]]);
}

/// Tests that a non-success status maps to an empty array.
#[tokio::test]
async fn error_status_yields_empty_array() {
    let test = TestBuilder::new()
        .with_response(
            "person",
            ResponseTemplate::new(503).set_body_json(json!({ "data": [{ "id": 1 }] })),
        )
        .build()
        .await
        .unwrap();
    let client = client_for(&test);

    let data = client.fetch_items("person", QueryParams::new()).await;

    assert_eq!(data, json!([]));
}

/// Tests that a body that is not JSON maps to an empty array.
#[tokio::test]
async fn malformed_json_yields_empty_array() {
    let test = TestBuilder::new()
        .with_response(
            "person",
            ResponseTemplate::new(200).set_body_string("{\"data\": [ {\"id\": 1 "),
        )
        .build()
        .await
        .unwrap();
    let client = client_for(&test);

    let data = client.fetch_items("person", QueryParams::new()).await;

    assert_eq!(data, json!([]));
}

/// Tests that a body without a `data` field maps to an empty array.
#[tokio::test]
async fn missing_data_field_yields_empty_array() {
    let test = TestBuilder::new()
        .with_response(
            "person",
            ResponseTemplate::new(200).set_body_json(json!({ "errors": [] })),
        )
        .with_response(
            "squad",
            ResponseTemplate::new(200).set_body_json(json!({ "data": null })),
        )
        .with_response(
            "role",
            ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])),
        )
        .build()
        .await
        .unwrap();
    let client = client_for(&test);

    assert_eq!(client.fetch_items("person", QueryParams::new()).await, json!([]));
    assert_eq!(client.fetch_unscoped("squad", &QueryParams::new()).await, json!([]));
    assert_eq!(client.fetch_unscoped("role", &QueryParams::new()).await, json!([]));
}

/// Tests that an unreachable API maps to an empty array instead of an error.
#[tokio::test]
async fn transport_failure_yields_empty_array() {
    let client = CollectionClient::new(reqwest::Client::new(), "http://127.0.0.1:9/items");

    let data = client.fetch_items("person", QueryParams::new()).await;

    assert_eq!(data, Value::Array(Vec::new()));
}
