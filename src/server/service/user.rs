//! User lookups.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::{favorite::UserFavoriteRepository, UserRepository},
        error::{not_found::NotFoundError, Error},
        model::favorite::FavoriteKind,
        service::favorite::group_by_user,
    },
};

/// Read access to users and the IDs of their favorites.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user ordered by ID, each with their favorite person & planet IDs
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        let favorite_repo = UserFavoriteRepository::new(self.db);
        let mut people = group_by_user(
            favorite_repo
                .get_all_item_ids(FavoriteKind::People)
                .await?,
        );
        let mut planets = group_by_user(
            favorite_repo
                .get_all_item_ids(FavoriteKind::Planet)
                .await?,
        );

        let users = users
            .into_iter()
            .map(|user| UserDto {
                favorites_people: people.remove(&user.id).unwrap_or_default(),
                favorites_planets: planets.remove(&user.id).unwrap_or_default(),
                id: user.id,
                name: user.name,
                email: user.email,
                is_active: user.is_active,
            })
            .collect();

        Ok(users)
    }

    /// Gets a single user with their favorite person & planet IDs
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user was found
    /// - `Err(Error::NotFound(NotFoundError::User))` - No user has the given ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(NotFoundError::User(user_id))?;

        let favorite_repo = UserFavoriteRepository::new(self.db);
        let favorites_people = favorite_repo
            .get_item_ids_by_user_id(user.id, FavoriteKind::People)
            .await?;
        let favorites_planets = favorite_repo
            .get_item_ids_by_user_id(user.id, FavoriteKind::Planet)
            .await?;

        Ok(UserDto {
            id: user.id,
            name: user.name,
            email: user.email,
            is_active: user.is_active,
            favorites_people,
            favorites_planets,
        })
    }
}
