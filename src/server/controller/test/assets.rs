use super::*;

/// Tests that existing public files are served directly.
#[tokio::test]
async fn serves_public_file() {
    let test = TestBuilder::new()
        .with_public_file("styles.css", "body { color: hotpink; }")
        .build()
        .await
        .unwrap();

    let response = get(app(&test).await, "/styles.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/css"
    );
    assert_eq!(body_bytes(response).await, b"body { color: hotpink; }".to_vec());
}

/// Tests that a public file shadows a role route of the same name.
///
/// Expected: file contents, no collection API request for persons
#[tokio::test]
async fn public_file_takes_precedence_over_role_route() {
    let test = TestBuilder::new()
        .with_role_persons(4, vec![fixture::person::entity()])
        .with_public_file("students", "static students")
        .build()
        .await
        .unwrap();

    let response = get(app(&test).await, "/students").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(template_of(&response), None);
    assert_eq!(body_bytes(response).await, b"static students".to_vec());
    assert!(test.received_queries("/items/person").await.is_empty());
}

/// Tests that nested asset paths are served.
#[tokio::test]
async fn serves_nested_public_file() {
    let test = TestBuilder::new()
        .with_public_file("img/logo.svg", "<svg/>")
        .build()
        .await
        .unwrap();

    let response = get(app(&test).await, "/img/logo.svg").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<svg/>".to_vec());
}

/// Tests that missing files fall through to routing.
#[tokio::test]
async fn missing_file_falls_through_to_routes() {
    let test = TestBuilder::new()
        .with_persons(vec![])
        .with_public_file("styles.css", "body {}")
        .build()
        .await
        .unwrap();

    let response = get(app(&test).await, "/").await;

    assert_eq!(template_of(&response), Some("index"));
}
