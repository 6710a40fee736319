//! Errors for users, catalog entries, and favorites that do not exist.
//!
//! Each variant maps to a 404 response whose body carries the message from
//! [`NotFoundError::message`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A referenced user, catalog entry, or favorite does not exist.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    /// No user has the ID
    #[error("User ID {0} not found")]
    User(i32),
    /// No person in the catalog has the ID
    #[error("Person ID {0} not found")]
    Person(i32),
    /// No planet in the catalog has the ID
    #[error("Planet ID {0} not found")]
    Planet(i32),
    /// The person is not among the user's favorites
    #[error("Person ID {person_id} is not in the favorites of user ID {user_id}")]
    PersonNotInFavorites {
        /// ID of the user
        user_id: i32,
        /// ID of the person
        person_id: i32,
    },
    /// The planet is not among the user's favorites
    #[error("Planet ID {planet_id} is not in the favorites of user ID {user_id}")]
    PlanetNotInFavorites {
        /// ID of the user
        user_id: i32,
        /// ID of the planet
        planet_id: i32,
    },
}

impl NotFoundError {
    /// Message returned to API consumers in the error body
    pub fn message(&self) -> &'static str {
        match self {
            Self::User(_) => "User not found",
            Self::Person(_) => "Person not found",
            Self::Planet(_) => "Planet not found",
            Self::PersonNotInFavorites { .. } => "Person not found in favorites",
            Self::PlanetNotInFavorites { .. } => "Planet not found in favorites",
        }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}
