//! Endpoints adding and removing favorite people & planets.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{FavoritePeopleDto, FavoritePlanetsDto},
    },
    server::{
        controller::util::validate_id,
        error::Error,
        model::{app::AppState, favorite::FavoriteKind},
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag for favorites endpoints
pub static FAVORITE_TAG: &str = "favorite";

/// Add a person to a user's favorites
///
/// Adding a person that is already a favorite succeeds without changing anything.
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("people_id" = i32, Path, description = "ID of the person to add")
    ),
    responses(
        (status = 200, description = "Person added to favorites", body = FavoritePeopleDto),
        (status = 400, description = "Invalid user or person ID", body = ErrorDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let user_id = validate_id("user_id", user_id)?;
    let people_id = validate_id("people_id", people_id)?;

    let favorites_people = FavoriteService::new(&state.db)
        .add_favorite(user_id, FavoriteKind::People, people_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoritePeopleDto {
            message: "People added to favorites".to_string(),
            favorites_people,
        }),
    ))
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("people_id" = i32, Path, description = "ID of the person to remove")
    ),
    responses(
        (status = 200, description = "Person removed from favorites", body = FavoritePeopleDto),
        (status = 400, description = "Invalid user or person ID", body = ErrorDto),
        (status = 404, description = "User not found or person not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let user_id = validate_id("user_id", user_id)?;
    let people_id = validate_id("people_id", people_id)?;

    let favorites_people = FavoriteService::new(&state.db)
        .remove_favorite(user_id, FavoriteKind::People, people_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoritePeopleDto {
            message: "People removed from favorites".to_string(),
            favorites_people,
        }),
    ))
}

/// Add a planet to a user's favorites
///
/// Adding a planet that is already a favorite succeeds without changing anything.
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet to add")
    ),
    responses(
        (status = 200, description = "Planet added to favorites", body = FavoritePlanetsDto),
        (status = 400, description = "Invalid user or planet ID", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let user_id = validate_id("user_id", user_id)?;
    let planet_id = validate_id("planet_id", planet_id)?;

    let favorites_planets = FavoriteService::new(&state.db)
        .add_favorite(user_id, FavoriteKind::Planet, planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoritePlanetsDto {
            message: "Planet added to favorites".to_string(),
            favorites_planets,
        }),
    ))
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet to remove")
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = FavoritePlanetsDto),
        (status = 400, description = "Invalid user or planet ID", body = ErrorDto),
        (status = 404, description = "User not found or planet not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let user_id = validate_id("user_id", user_id)?;
    let planet_id = validate_id("planet_id", planet_id)?;

    let favorites_planets = FavoriteService::new(&state.db)
        .remove_favorite(user_id, FavoriteKind::Planet, planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoritePlanetsDto {
            message: "Planet removed from favorites".to_string(),
            favorites_planets,
        }),
    ))
}
