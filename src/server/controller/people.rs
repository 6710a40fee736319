//! People catalog endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, catalog::PersonDto},
    server::{
        controller::util::validate_id, error::Error, model::app::AppState,
        service::catalog::CatalogService,
    },
};

/// OpenAPI tag for people catalog endpoints
pub static PEOPLE_TAG: &str = "people";

/// List every person in the catalog
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when listing the people catalog", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = CatalogService::new(&state.db).list_people().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Get a single person from the catalog
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "ID of the person")
    ),
    responses(
        (status = 200, description = "Success when retrieving the person", body = PersonDto),
        (status = 400, description = "Invalid person ID", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let id = validate_id("id", id)?;

    let person = CatalogService::new(&state.db).get_person(id).await?;

    Ok((StatusCode::OK, Json(person)))
}
