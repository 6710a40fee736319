use holonet::{
    model::{api::ErrorDto, favorite::UserFavoritesDto, user::UserDto},
    server::controller::user::{get_all_favorites, get_user, get_users},
};

use super::*;

/// Expect 200 with every user and their favorite IDs
#[tokio::test]
async fn lists_users_with_favorite_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_person("Cassian")
        .with_mock_person("Mon Mothma")
        .with_mock_planet("Agamar")
        .with_mock_user("Alice")
        .with_mock_user("Bob")
        .with_favorite_person(2, 2)
        .with_favorite_person(2, 1)
        .with_favorite_planet(1, 1)
        .build()
        .await?;

    let resp = get_users(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<UserDto> = body_json(resp).await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Alice");
    assert!(users[0].favorites_people.is_empty());
    assert_eq!(users[0].favorites_planets, vec![1]);
    assert_eq!(users[1].favorites_people, vec![1, 2]);
    assert!(users[1].favorites_planets.is_empty());

    Ok(())
}

/// Expect 200 with the seeded user's details
#[tokio::test]
async fn gets_user_by_id() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = get_user(State(test.to_app_state::<AppState>()), Path(3))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.name, "Oscar");
    assert_eq!(user.email, "racso@gmail.com");
    assert!(user.is_active);

    Ok(())
}

/// Expect 404 for a user that does not exist
#[tokio::test]
async fn not_found_for_unknown_user() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = get_user(State(test.to_app_state::<AppState>()), Path(10)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User not found");

    Ok(())
}

/// Expect one entry per seeded user with empty name lists
#[tokio::test]
async fn lists_empty_favorites_for_fresh_seed() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = get_all_favorites(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Vec<UserFavoritesDto> = body_json(resp).await;
    let names: Vec<&str> = favorites.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Oscar"]);
    assert!(favorites
        .iter()
        .all(|f| f.favorites_people.is_empty() && f.favorites_planets.is_empty()));

    Ok(())
}

/// Expect favorites resolved to catalog names
#[tokio::test]
async fn lists_favorites_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_person("Cassian")
        .with_mock_planet("Aeos Prime")
        .with_mock_planet("Agamar")
        .with_mock_user("Alice")
        .with_favorite_person(1, 1)
        .with_favorite_planet(1, 2)
        .build()
        .await?;

    let resp = get_all_favorites(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    let favorites: Vec<UserFavoritesDto> = body_json(resp).await;
    assert_eq!(
        favorites,
        vec![UserFavoritesDto {
            user_id: 1,
            name: "Alice".to_string(),
            favorites_people: vec!["Cassian".to_string()],
            favorites_planets: vec!["Agamar".to_string()],
        }]
    );

    Ok(())
}
