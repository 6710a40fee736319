//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    // Tables to create
    include_tables: bool,
    tables: Vec<TableCreateStatement>,

    // Database fixtures to insert, in insertion order
    people: Vec<String>,
    planets: Vec<String>,
    users: Vec<String>,
    favorite_people: Vec<(i32, i32)>, // (user_id, people_id)
    favorite_planets: Vec<(i32, i32)>, // (user_id, planet_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every holonet table to the test database.
    ///
    /// Creates People, Planet, User, UserFavoritePeople, and UserFavoritePlanet, in
    /// foreign key order.
    pub fn with_tables(mut self) -> Self {
        self.include_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`
    /// after the standard tables. Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(People)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock person with the given name into the catalog.
    ///
    /// People are inserted in the order they are added, so the first gets ID 1.
    pub fn with_mock_person(mut self, name: impl Into<String>) -> Self {
        self.people.push(name.into());
        self
    }

    /// Insert a mock planet with the given name into the catalog.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a mock user with the given name.
    ///
    /// The email is derived from the name, see
    /// [`UserFixtures::insert_mock_user`](crate::fixtures::user::UserFixtures::insert_mock_user).
    pub fn with_mock_user(mut self, name: impl Into<String>) -> Self {
        self.users.push(name.into());
        self
    }

    /// Mark a person as a favorite of a user. Both must exist once fixtures are inserted.
    pub fn with_favorite_person(mut self, user_id: i32, people_id: i32) -> Self {
        self.favorite_people.push((user_id, people_id));
        self
    }

    /// Mark a planet as a favorite of a user. Both must exist once fixtures are inserted.
    pub fn with_favorite_planet(mut self, user_id: i32, planet_id: i32) -> Self {
        self.favorite_planets.push((user_id, planet_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (standard tables if specified, then custom tables)
    /// 2. Inserts catalog entries and users
    /// 3. Inserts favorites
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::People),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::UserFavoritePeople),
                schema.create_table_from_entity(entity::prelude::UserFavoritePlanet),
            ]);
        }
        all_tables.extend(self.tables);

        setup.create_tables(all_tables).await?;

        // 2. Insert catalog entries & users
        for name in &self.people {
            setup.catalog().insert_mock_person(name).await?;
        }
        for name in &self.planets {
            setup.catalog().insert_mock_planet(name).await?;
        }
        for name in &self.users {
            setup.user().insert_mock_user(name).await?;
        }

        // 3. Insert favorites
        for (user_id, people_id) in self.favorite_people {
            setup.user().insert_favorite_person(user_id, people_id).await?;
        }
        for (user_id, planet_id) in self.favorite_planets {
            setup.user().insert_favorite_planet(user_id, planet_id).await?;
        }

        Ok(setup)
    }
}
