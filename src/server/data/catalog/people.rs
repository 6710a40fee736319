//! Repository for the people catalog.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::catalog::NewPerson;

/// Access to the `people` table.
pub struct PeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new person catalog entry
    pub async fn create(&self, person: NewPerson) -> Result<entity::people::Model, DbErr> {
        let person = entity::people::ActiveModel {
            name: ActiveValue::Set(person.name),
            locations: ActiveValue::Set(person.locations),
            gender: ActiveValue::Set(person.gender),
            dimensions: ActiveValue::Set(person.dimensions),
            weapons: ActiveValue::Set(person.weapons),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    /// Gets every person in the catalog ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::people::Model>, DbErr> {
        entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a person by ID, `None` if no such person exists
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::people::Model>, DbErr> {
        entity::prelude::People::find_by_id(id).one(self.db).await
    }

    /// Counts the people in the catalog
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::People::find().count(self.db).await
    }

    /// Deletes a person, cascading to any favorites referencing them
    ///
    /// Returns OK regardless of the person existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::People::delete_by_id(id).exec(self.db).await
    }
}
