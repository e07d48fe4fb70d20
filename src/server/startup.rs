use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    service::{collection::CollectionClient, squad::SquadService},
    state::SiteContext,
};

/// Builds the HTTP client used for collection API requests.
///
/// Redirects are not followed, so a misbehaving upstream cannot bounce requests to
/// arbitrary hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Loads the data shared by every request.
///
/// Fetches the squad roster exactly once. A failed fetch is logged by the collection
/// client and leaves the roster empty; the server still starts.
pub async fn load_site_context(client: &CollectionClient) -> SiteContext {
    let squads = SquadService::new(client).list_in_scope().await;

    if squads.is_empty() {
        tracing::warn!("Squad roster is empty; pages will render without squads");
    } else {
        tracing::info!("Loaded {} squads", squads.len());
    }

    SiteContext::new(squads)
}

/// Binds the TCP listener on all interfaces at the configured port.
pub async fn bind_listener(config: &Config) -> Result<TcpListener, AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    Ok(listener)
}
