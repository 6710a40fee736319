//! Catalog lookups.

use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{PersonDto, PlanetDto},
    server::{
        data::catalog::{people::PeopleRepository, planet::PlanetRepository},
        error::{not_found::NotFoundError, Error},
        model::db::{PersonModel, PlanetModel},
    },
};

/// Read access to the people & planet catalogs.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every person in the catalog ordered by ID
    pub async fn list_people(&self) -> Result<Vec<PersonDto>, Error> {
        let people = PeopleRepository::new(self.db).get_all().await?;

        Ok(people.into_iter().map(person_dto).collect())
    }

    /// Gets a single person
    ///
    /// # Returns
    /// - `Ok(PersonDto)` - The person was found
    /// - `Err(Error::NotFound(NotFoundError::Person))` - No person has the given ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_person(&self, id: i32) -> Result<PersonDto, Error> {
        let person = PeopleRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Person(id))?;

        Ok(person_dto(person))
    }

    /// Lists every planet in the catalog ordered by ID
    pub async fn list_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(planet_dto).collect())
    }

    /// Gets a single planet
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The planet was found
    /// - `Err(Error::NotFound(NotFoundError::Planet))` - No planet has the given ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_planet(&self, id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Planet(id))?;

        Ok(planet_dto(planet))
    }
}

fn person_dto(person: PersonModel) -> PersonDto {
    PersonDto {
        id: person.id,
        name: person.name,
        locations: person.locations,
        gender: person.gender,
        dimensions: person.dimensions,
        weapons: person.weapons,
    }
}

fn planet_dto(planet: PlanetModel) -> PlanetDto {
    PlanetDto {
        id: planet.id,
        name: planet.name,
        appearances: planet.appearances,
    }
}
