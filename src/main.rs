mod server;

use std::sync::Arc;

use axum::{extract::Request, ServiceExt};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, render::JsonRenderer, router, service::collection::CollectionClient,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let client = CollectionClient::new(http_client, config.api_base.clone());

    // Loaded before binding so no request ever sees a partially initialized roster.
    let site = startup::load_site_context(&client).await;

    let app = router::trim_trailing_slash(
        router::router(config.public_dir.clone())
            .with_state(AppState::new(client, site, Arc::new(JsonRenderer))),
    );

    let listener = startup::bind_listener(&config).await?;
    tracing::info!("App: http://localhost:{}", config.port);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
