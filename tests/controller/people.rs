use holonet::{
    model::{api::ErrorDto, catalog::PersonDto},
    server::controller::people::{get_people, get_person},
};

use super::*;

/// Expect 200 with the seeded people in ID order
#[tokio::test]
async fn lists_people_in_order() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = get_people(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let people: Vec<PersonDto> = body_json(resp).await;
    let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cassian", "Mon Mothma", "Luthen Rael"]);

    Ok(())
}

/// Expect 200 with an empty array when the catalog is empty
#[tokio::test]
async fn lists_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = get_people(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let people: Vec<PersonDto> = body_json(resp).await;
    assert!(people.is_empty());

    Ok(())
}

/// Expect 200 with every field of the requested person
#[tokio::test]
async fn gets_person_by_id() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = get_person(State(test.to_app_state::<AppState>()), Path(2))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let person: PersonDto = body_json(resp).await;
    assert_eq!(
        person,
        PersonDto {
            id: 2,
            name: "Mon Mothma".to_string(),
            locations: "Coruscant".to_string(),
            gender: "Female".to_string(),
            dimensions: "Height: 1.5m".to_string(),
            weapons: "BlasTech A280-CFE".to_string(),
        }
    );

    Ok(())
}

/// Expect 404 with an error body for a person that does not exist
#[tokio::test]
async fn not_found_for_unknown_person() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = get_person(State(test.to_app_state::<AppState>()), Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Person not found");

    Ok(())
}

/// Expect 400 for a non-positive ID
#[tokio::test]
async fn bad_request_for_non_positive_id() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = get_person(State(test.to_app_state::<AppState>()), Path(0))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 when the tables are missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_people(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Internal server error");

    Ok(())
}
