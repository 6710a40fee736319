use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Fixture helpers for users and favorites.
pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl TestContext {
    /// Access user fixture helpers
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the given name.
    ///
    /// The email is the lowercased name with spaces removed at `example.com`, so names
    /// must be unique within a test.
    pub async fn insert_mock_user(&self, name: &str) -> Result<entity::user::Model, TestError> {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', ""));

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(email),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a favorite person row for the user.
    pub async fn insert_favorite_person(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<entity::user_favorite_people::Model, TestError> {
        Ok(entity::prelude::UserFavoritePeople::insert(
            entity::user_favorite_people::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                people_id: ActiveValue::Set(people_id),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a favorite planet row for the user.
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::user_favorite_planet::Model, TestError> {
        Ok(entity::prelude::UserFavoritePlanet::insert(
            entity::user_favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
