//! HTTP request handlers.
//!
//! Each handler resolves its route input, calls the service layer and renders one
//! template. Handlers never see collection API failures: services return empty results
//! instead, so the only errors surfacing here are rendering failures.

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

pub mod listing;
pub mod role;
pub mod search;
pub mod student;

#[cfg(test)]
mod test;

/// `?sort=` query parameter shared by listing routes.
#[derive(Deserialize, Default)]
pub struct SortQuery {
    pub sort: Option<String>,
}

impl SortQuery {
    /// Extracts the sort key, treating an unparseable query string as no sort key.
    pub fn from_extracted(query: Result<Query<SortQuery>, QueryRejection>) -> Self {
        query.map(|Query(query)| query).unwrap_or_default()
    }
}

/// Terminal handler for paths no route claims.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
