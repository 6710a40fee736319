//! Error types for the holonet server application.
//!
//! This module provides the unified `Error` type returned by services and controllers,
//! along with domain-specific error types for configuration and missing records. All
//! errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait implementations.

pub mod config;
pub mod not_found;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, not_found::NotFoundError},
};

/// Main error type for the holonet server application.
///
/// Aggregates domain-specific error types and external library errors into a single
/// type. `#[from]` conversions allow `?` to lift repository and startup errors, and the
/// `IntoResponse` implementation maps each variant to an HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A referenced user, catalog entry, or favorite does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Request input is well-formed for routing but not acceptable (e.g. non-positive IDs).
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For rejected request input
/// - 404 Not Found - For missing users, catalog entries, or favorites
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::NotFound(err) => err.into_response(),
            Self::BadRequest(message) => {
                tracing::debug!("Rejected request: {}", message);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
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
