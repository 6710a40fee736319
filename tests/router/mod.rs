//! Tests for the assembled router.
//!
//! Requests are sent through the full router with `tower::ServiceExt::oneshot`, covering
//! route registration, path extraction, and the Swagger UI mount.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use holonet::{
    model::{
        api::ErrorDto,
        catalog::PersonDto,
        favorite::{FavoritePeopleDto, FavoritePlanetsDto, UserFavoritesDto},
        user::UserDto,
    },
    server::{model::app::AppState, router::routes},
};
use holonet_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, seeded};

fn app(test: &TestContext) -> Router {
    routes().with_state(test.to_app_state::<AppState>())
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Expect the people catalog to be served at /people
#[tokio::test]
async fn serves_people_catalog() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = app(&test)
        .oneshot(request(Method::GET, "/people"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let people: Vec<PersonDto> = body_json(resp).await;
    assert_eq!(people.len(), 3);

    Ok(())
}

/// Expect 404 with the planet error body from /planet/{id}
#[tokio::test]
async fn unknown_planet_returns_not_found_body() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = app(&test)
        .oneshot(request(Method::GET, "/planet/42"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Planet not found");

    Ok(())
}

/// Expect a non-integer path segment to be rejected
#[tokio::test]
async fn non_integer_id_is_rejected() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = app(&test)
        .oneshot(request(Method::GET, "/people/abc"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect /users/favorites to be routed to the favorites listing rather than a user lookup
#[tokio::test]
async fn favorites_listing_is_not_a_user_id() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = app(&test)
        .oneshot(request(Method::GET, "/users/favorites"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Vec<UserFavoritesDto> = body_json(resp).await;
    assert_eq!(favorites.len(), 3);

    Ok(())
}

/// Expect people and planet favorites to be added through their own routes
#[tokio::test]
async fn adds_favorites_through_distinct_routes() -> Result<(), TestError> {
    let test = seeded().await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(request(Method::POST, "/users/2/favorite/people/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: FavoritePeopleDto = body_json(resp).await;
    assert_eq!(body.favorites_people, vec![1]);

    let resp = app
        .clone()
        .oneshot(request(Method::POST, "/users/2/favorite/planet/3"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: FavoritePlanetsDto = body_json(resp).await;
    assert_eq!(body.favorites_planets, vec![3]);

    let resp = app
        .oneshot(request(Method::GET, "/users/2"))
        .await
        .unwrap();
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.favorites_people, vec![1]);
    assert_eq!(user.favorites_planets, vec![3]);

    Ok(())
}

/// Expect the favorites listing to show Bob's new favorite by name
#[tokio::test]
async fn added_favorite_appears_in_listing() -> Result<(), TestError> {
    let test = seeded().await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(request(Method::POST, "/users/2/favorite/people/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(request(Method::GET, "/users/favorites"))
        .await
        .unwrap();

    let favorites: Vec<UserFavoritesDto> = body_json(resp).await;
    assert_eq!(favorites[1].name, "Bob");
    assert_eq!(favorites[1].favorites_people, vec!["Cassian".to_string()]);

    Ok(())
}

/// Expect DELETE on a favorite that is not present to return 404
#[tokio::test]
async fn deleting_missing_favorite_returns_not_found() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = app(&test)
        .oneshot(request(Method::DELETE, "/users/1/favorite/planet/3"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Planet not found in favorites");

    Ok(())
}

/// Expect the OpenAPI document to be served alongside Swagger UI
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["paths"]["/users/{user_id}/favorite/planet/{planet_id}"]["post"].is_object());
    assert!(doc["paths"]["/users/{user_id}/favorite/planet/{planet_id}"]["delete"].is_object());

    Ok(())
}
