//! Planet catalog endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, catalog::PlanetDto},
    server::{
        controller::util::validate_id, error::Error, model::app::AppState,
        service::catalog::CatalogService,
    },
};

/// OpenAPI tag for planet catalog endpoints
pub static PLANET_TAG: &str = "planet";

/// List every planet in the catalog
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when listing the planet catalog", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = CatalogService::new(&state.db).list_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet from the catalog
#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 400, description = "Invalid planet ID", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let id = validate_id("id", id)?;

    let planet = CatalogService::new(&state.db).get_planet(id).await?;

    Ok((StatusCode::OK, Json(planet)))
}
