//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type returned by startup code and request handlers.
//!
//! Remote collection API failures are deliberately absent from `AppError`: they are
//! described by `CollectionError`, logged by the collection client and replaced with an
//! empty result before any handler sees them.

pub mod collection;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::server::{error::config::ConfigError, model::api::ErrorDto};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`. Every variant is an
/// internal failure from the client's point of view, so all of them map to a
/// 500 Internal Server Error with a generic body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Socket or filesystem error, typically while binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Failure to serialize a view context into the renderer's data mapping.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),
}

/// Converts application errors into HTTP responses.
///
/// The full error is logged server-side; clients only receive a generic message so
/// remote URLs or filesystem paths never leak into responses.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
