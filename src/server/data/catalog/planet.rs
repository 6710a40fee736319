//! Repository for the planet catalog.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::catalog::NewPlanet;

/// Access to the `planet` table.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet catalog entry
    pub async fn create(&self, planet: NewPlanet) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            appearances: ActiveValue::Set(planet.appearances),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets every planet in the catalog ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a planet by ID, `None` if no such planet exists
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(id).one(self.db).await
    }

    /// Counts the planets in the catalog
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Planet::find().count(self.db).await
    }

    /// Deletes a planet, cascading to any favorites referencing it
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(id).exec(self.db).await
    }
}
