use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Fixture helpers for the people & planet catalogs.
pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl TestContext {
    /// Access catalog fixture helpers
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a person with the given name and placeholder display fields.
    pub async fn insert_mock_person(
        &self,
        name: &str,
    ) -> Result<entity::people::Model, TestError> {
        Ok(
            entity::prelude::People::insert(entity::people::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                locations: ActiveValue::Set("Coruscant".to_string()),
                gender: ActiveValue::Set("Female".to_string()),
                dimensions: ActiveValue::Set("Height: 1.5m".to_string()),
                weapons: ActiveValue::Set("BlasTech A280-CFE".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a planet with the given name and placeholder appearances.
    pub async fn insert_mock_planet(
        &self,
        name: &str,
    ) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                appearances: ActiveValue::Set("Star Wars Rebels".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
