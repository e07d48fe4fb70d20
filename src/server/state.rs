//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! request handlers. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Collection API client for outbound queries
//! - Site context loaded once at startup (the squad roster)
//! - Template renderer

use std::sync::Arc;

use crate::server::{model::squad::Squad, render::Renderer, service::collection::CollectionClient};

/// Data loaded once before the server accepts connections.
///
/// Never mutated after construction; handlers only read it.
#[derive(Debug, Default)]
pub struct SiteContext {
    /// Squads of the configured cohort and tribe.
    pub squads: Vec<Squad>,
}

impl SiteContext {
    pub fn new(squads: Vec<Squad>) -> Self {
        Self { squads }
    }
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `CollectionClient` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `Arc<SiteContext>` and `Arc<dyn Renderer>` are reference-counted pointers
#[derive(Clone)]
pub struct AppState {
    /// Client for the remote collection API.
    pub client: CollectionClient,

    /// Startup-loaded, read-only site data.
    pub site: Arc<SiteContext>,

    /// Renderer turning template names and data mappings into responses.
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `client` - Collection API client
    /// - `site` - Site context produced by `startup::load_site_context`
    /// - `renderer` - Template renderer
    pub fn new(client: CollectionClient, site: SiteContext, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            client,
            site: Arc::new(site),
            renderer,
        }
    }
}
