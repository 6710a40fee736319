//! Seed data loaded into an empty database at startup.
//!
//! Each table is seeded only while it is empty, so restarting the server against an
//! existing database leaves its contents alone.

use sea_orm::{ConnectionTrait, DbErr, TransactionSession, TransactionTrait};

use crate::server::{
    data::{
        catalog::{people::PeopleRepository, planet::PlanetRepository},
        user::UserRepository,
    },
    model::{
        catalog::{NewPerson, NewPlanet},
        user::NewUser,
    },
};

/// The seed people catalog, in ID order.
pub fn seed_people() -> Vec<NewPerson> {
    [
        ("Cassian", "Kenari", "Male", "Height: 1.78m"),
        ("Mon Mothma", "Coruscant", "Female", "Height: 1.5m"),
        ("Luthen Rael", "Coruscant", "Male", "Height: 1.78m"),
    ]
    .into_iter()
    .map(|(name, locations, gender, dimensions)| NewPerson {
        name: name.to_string(),
        locations: locations.to_string(),
        gender: gender.to_string(),
        dimensions: dimensions.to_string(),
        weapons: "BlasTech A280-CFE".to_string(),
    })
    .collect()
}

/// The seed planet catalog, in ID order.
pub fn seed_planets() -> Vec<NewPlanet> {
    [
        ("Aeos Prime", "Star Wars Resistance"),
        ("Agamar", "Star Wars Rebels"),
        ("Ahch-To", "Star Wars: The Last Jedi (Episode VIII)"),
    ]
    .into_iter()
    .map(|(name, appearances)| NewPlanet {
        name: name.to_string(),
        appearances: appearances.to_string(),
    })
    .collect()
}

/// The seed users, in ID order. None start with any favorites.
pub fn seed_users() -> Vec<NewUser> {
    [
        ("Alice", "alice@gmail.com"),
        ("Bob", "bob@gmail.com"),
        ("Oscar", "racso@gmail.com"),
    ]
    .into_iter()
    .map(|(name, email)| NewUser {
        name: name.to_string(),
        email: email.to_string(),
        is_active: true,
    })
    .collect()
}

/// Seeds the catalogs and users into any of their tables that are empty.
///
/// Runs in a single transaction so a failure part way through leaves nothing behind.
pub async fn seed_database<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    let people_repo = PeopleRepository::new(&txn);
    if people_repo.count().await? == 0 {
        for person in seed_people() {
            people_repo.create(person).await?;
        }
        tracing::info!("Seeded people catalog");
    }

    let planet_repo = PlanetRepository::new(&txn);
    if planet_repo.count().await? == 0 {
        for planet in seed_planets() {
            planet_repo.create(planet).await?;
        }
        tracing::info!("Seeded planet catalog");
    }

    let user_repo = UserRepository::new(&txn);
    if user_repo.count().await? == 0 {
        for user in seed_users() {
            user_repo.create(user).await?;
        }
        tracing::info!("Seeded users");
    }

    txn.commit().await?;

    Ok(())
}
