//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document served at `/api/docs/openapi.json`.
///
/// # Registered Endpoints
/// - `GET /people` - List the people catalog
/// - `GET /people/{id}` - Get a single person
/// - `GET /planet` - List the planet catalog
/// - `GET /planet/{id}` - Get a single planet
/// - `GET /users` - List users with their favorite IDs
/// - `GET /users/{user_id}` - Get a single user with their favorite IDs
/// - `GET /users/favorites` - List every user's favorites by name
/// - `POST`/`DELETE /users/{user_id}/favorite/people/{people_id}` - Add or remove a favorite person
/// - `POST`/`DELETE /users/{user_id}/favorite/planet/{planet_id}` - Add or remove a favorite planet
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, awaiting its state.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::people::PEOPLE_TAG, description = "People catalog API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog API routes"),
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorites management API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::people::get_people))
        .routes(routes!(controller::people::get_person))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::get_all_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
