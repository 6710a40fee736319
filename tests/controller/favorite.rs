use holonet::{
    model::{
        api::ErrorDto,
        favorite::{FavoritePeopleDto, FavoritePlanetsDto},
    },
    server::controller::favorite::{
        add_favorite_person, add_favorite_planet, remove_favorite_person, remove_favorite_planet,
    },
};

use super::*;

/// Expect 200 with the add message and the updated person IDs
#[tokio::test]
async fn adds_favorite_person() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = add_favorite_person(State(test.to_app_state::<AppState>()), Path((2, 1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: FavoritePeopleDto = body_json(resp).await;
    assert_eq!(body.message, "People added to favorites");
    assert_eq!(body.favorites_people, vec![1]);

    Ok(())
}

/// Expect adding a favorite twice to return the same set
#[tokio::test]
async fn adding_favorite_planet_twice_is_idempotent() -> Result<(), TestError> {
    let test = seeded().await?;

    assert!(add_favorite_planet(State(test.to_app_state::<AppState>()), Path((1, 2)))
        .await
        .is_ok());
    let resp = add_favorite_planet(State(test.to_app_state::<AppState>()), Path((1, 2)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: FavoritePlanetsDto = body_json(resp).await;
    assert_eq!(body.message, "Planet added to favorites");
    assert_eq!(body.favorites_planets, vec![2]);

    Ok(())
}

/// Expect 404 for a planet missing from the catalog
#[tokio::test]
async fn not_found_when_adding_unknown_planet() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = add_favorite_planet(State(test.to_app_state::<AppState>()), Path((1, 9)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Planet not found");

    Ok(())
}

/// Expect 404 for a user that does not exist
#[tokio::test]
async fn not_found_when_adding_for_unknown_user() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = add_favorite_person(State(test.to_app_state::<AppState>()), Path((8, 1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User not found");

    Ok(())
}

/// Expect 200 with the remove message and the remaining person IDs
#[tokio::test]
async fn removes_favorite_person() -> Result<(), TestError> {
    let test = seeded().await?;

    assert!(add_favorite_person(State(test.to_app_state::<AppState>()), Path((3, 1)))
        .await
        .is_ok());
    assert!(add_favorite_person(State(test.to_app_state::<AppState>()), Path((3, 3)))
        .await
        .is_ok());
    let resp = remove_favorite_person(State(test.to_app_state::<AppState>()), Path((3, 1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: FavoritePeopleDto = body_json(resp).await;
    assert_eq!(body.message, "People removed from favorites");
    assert_eq!(body.favorites_people, vec![3]);

    Ok(())
}

/// Expect 404 when removing a person twice
#[tokio::test]
async fn not_found_when_removing_person_twice() -> Result<(), TestError> {
    let test = seeded().await?;

    assert!(add_favorite_person(State(test.to_app_state::<AppState>()), Path((1, 2)))
        .await
        .is_ok());
    let first = remove_favorite_person(State(test.to_app_state::<AppState>()), Path((1, 2)))
        .await
        .into_response();
    let second = remove_favorite_person(State(test.to_app_state::<AppState>()), Path((1, 2)))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(second).await;
    assert_eq!(body.error, "Person not found in favorites");

    Ok(())
}

/// Expect 404 when removing a planet that was never added
#[tokio::test]
async fn not_found_when_removing_planet_not_in_favorites() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = remove_favorite_planet(State(test.to_app_state::<AppState>()), Path((1, 3))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Planet not found in favorites");

    Ok(())
}

/// Expect 200 with the remove message after removing a planet
#[tokio::test]
async fn removes_favorite_planet() -> Result<(), TestError> {
    let test = seeded().await?;

    assert!(add_favorite_planet(State(test.to_app_state::<AppState>()), Path((2, 3)))
        .await
        .is_ok());
    let resp = remove_favorite_planet(State(test.to_app_state::<AppState>()), Path((2, 3)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: FavoritePlanetsDto = body_json(resp).await;
    assert_eq!(body.message, "Planet removed from favorites");
    assert!(body.favorites_planets.is_empty());

    Ok(())
}

/// Expect 400 for a non-positive user ID before touching the database
#[tokio::test]
async fn bad_request_for_non_positive_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = add_favorite_person(State(test.to_app_state::<AppState>()), Path((0, 1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
