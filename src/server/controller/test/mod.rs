use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower_http::normalize_path::NormalizePath;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory, fixture};
use tower::ServiceExt;
use wiremock::ResponseTemplate;

use crate::server::{
    render::{JsonRenderer, TEMPLATE_HEADER},
    router,
    service::collection::CollectionClient,
    startup,
    state::AppState,
};

mod assets;

/// Builds the full application against the test context's mock API and public directory.
///
/// Runs the startup loader, so the squad roster is fetched exactly as in production.
async fn app(test: &TestContext) -> NormalizePath<Router> {
    let client = CollectionClient::new(reqwest::Client::new(), test.api_base());
    let site = startup::load_site_context(&client).await;

    router::trim_trailing_slash(router::router(test.public_path()).with_state(
        AppState::new(client, site, Arc::new(JsonRenderer)),
    ))
}

async fn get(app: NormalizePath<Router>, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: NormalizePath<Router>, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn template_of(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(TEMPLATE_HEADER)
        .and_then(|value| value.to_str().ok())
}

fn location_of(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Value of `key` in a list of decoded query pairs.
fn query_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
