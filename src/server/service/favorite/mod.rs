//! Favorites management.
//!
//! Adds & removes catalog entries from a user's favorites and resolves every user's
//! favorites to catalog names. Mutations check that the referenced records exist and
//! apply the change inside one transaction, so a failed check never leaves a partial
//! write behind.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::favorite::UserFavoritesDto,
    server::{
        data::{
            catalog::{people::PeopleRepository, planet::PlanetRepository},
            user::{favorite::UserFavoriteRepository, UserRepository},
        },
        error::{not_found::NotFoundError, Error},
        model::favorite::FavoriteKind,
    },
};

/// Service for managing users' favorite people & planets.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a catalog entry to a user's favorites.
    ///
    /// Adding an entry that is already a favorite is not an error and changes nothing.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose favorites to update
    /// - `kind` - Which catalog `item_id` refers to
    /// - `item_id` - ID of the person or planet to add
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - The user's favorite IDs of `kind` after the update, ascending
    /// - `Err(Error::NotFound(NotFoundError::User))` - The user does not exist
    /// - `Err(Error::NotFound(NotFoundError::Person | NotFoundError::Planet))` - The item does
    ///   not exist in the catalog of `kind`
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        item_id: i32,
    ) -> Result<Vec<i32>, Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(NotFoundError::User(user_id).into());
        }

        let item_exists = match kind {
            FavoriteKind::People => PeopleRepository::new(&txn)
                .get_by_id(item_id)
                .await?
                .is_some(),
            FavoriteKind::Planet => PlanetRepository::new(&txn)
                .get_by_id(item_id)
                .await?
                .is_some(),
        };
        if !item_exists {
            return Err(kind.item_not_found(item_id).into());
        }

        let favorite_repo = UserFavoriteRepository::new(&txn);
        let inserted = favorite_repo.add(user_id, kind, item_id).await?;
        let item_ids = favorite_repo
            .get_item_ids_by_user_id(user_id, kind)
            .await?;

        txn.commit().await?;

        if inserted {
            tracing::info!(user_id = %user_id, item_id = %item_id, "Added {} to favorites", kind);
        } else {
            tracing::debug!(
                user_id = %user_id,
                item_id = %item_id,
                "{} already in favorites, nothing to add",
                kind
            );
        }

        Ok(item_ids)
    }

    /// Removes a catalog entry from a user's favorites.
    ///
    /// Only membership in the user's favorites is checked, the catalog itself is not
    /// consulted.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - The user's favorite IDs of `kind` after the update, ascending
    /// - `Err(Error::NotFound(NotFoundError::User))` - The user does not exist
    /// - `Err(Error::NotFound(NotFoundError::PersonNotInFavorites | NotFoundError::PlanetNotInFavorites))` -
    ///   The item is not among the user's favorites
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        item_id: i32,
    ) -> Result<Vec<i32>, Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(NotFoundError::User(user_id).into());
        }

        let favorite_repo = UserFavoriteRepository::new(&txn);
        if !favorite_repo.remove(user_id, kind, item_id).await? {
            return Err(kind.not_in_favorites(user_id, item_id).into());
        }
        let item_ids = favorite_repo
            .get_item_ids_by_user_id(user_id, kind)
            .await?;

        txn.commit().await?;

        tracing::info!(user_id = %user_id, item_id = %item_id, "Removed {} from favorites", kind);

        Ok(item_ids)
    }

    /// Lists every user's favorites resolved to catalog names.
    ///
    /// Users are returned in ID order, names within each list in catalog order. A
    /// favorite whose catalog entry can no longer be found is left out.
    pub async fn list_all_favorites(&self) -> Result<Vec<UserFavoritesDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        let favorite_repo = UserFavoriteRepository::new(self.db);
        let mut people = group_by_user(
            favorite_repo
                .get_all_item_names(FavoriteKind::People)
                .await?,
        );
        let mut planets = group_by_user(
            favorite_repo
                .get_all_item_names(FavoriteKind::Planet)
                .await?,
        );

        let favorites = users
            .into_iter()
            .map(|user| UserFavoritesDto {
                favorites_people: people.remove(&user.id).unwrap_or_default(),
                favorites_planets: planets.remove(&user.id).unwrap_or_default(),
                user_id: user.id,
                name: user.name,
            })
            .collect();

        Ok(favorites)
    }
}

/// Groups `(user_id, value)` pairs by user, preserving the order values appear in.
pub(crate) fn group_by_user<T>(pairs: Vec<(i32, T)>) -> HashMap<i32, Vec<T>> {
    let mut grouped: HashMap<i32, Vec<T>> = HashMap::new();

    for (user_id, value) in pairs {
        grouped.entry(user_id).or_default().push(value);
    }

    grouped
}
