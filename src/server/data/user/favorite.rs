//! Repository for the favorite join tables.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::favorite::FavoriteKind;

/// Access to the `user_favorite_people` & `user_favorite_planet` join tables.
///
/// Every method takes a [`FavoriteKind`] selecting which join table to operate on.
/// Item IDs are person IDs for [`FavoriteKind::People`] and planet IDs for
/// [`FavoriteKind::Planet`].
pub struct UserFavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserFavoriteRepository<'a, C> {
    /// Creates a new instance of [`UserFavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds an item to a user's favorites
    ///
    /// Inserting a pair that already exists is a no-op rather than a constraint violation,
    /// which keeps concurrent adds of the same favorite from failing.
    ///
    /// # Returns
    /// - `Ok(true)`: The favorite was inserted
    /// - `Ok(false)`: The item was already in the user's favorites
    /// - `Err(DbErr)`: Database error, e.g. a foreign key violation for a missing user or item
    pub async fn add(&self, user_id: i32, kind: FavoriteKind, item_id: i32) -> Result<bool, DbErr> {
        let result = match kind {
            FavoriteKind::People => {
                entity::prelude::UserFavoritePeople::insert(
                    entity::user_favorite_people::ActiveModel {
                        user_id: ActiveValue::Set(user_id),
                        people_id: ActiveValue::Set(item_id),
                    },
                )
                .on_conflict(
                    OnConflict::columns([
                        entity::user_favorite_people::Column::UserId,
                        entity::user_favorite_people::Column::PeopleId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await
            }
            FavoriteKind::Planet => {
                entity::prelude::UserFavoritePlanet::insert(
                    entity::user_favorite_planet::ActiveModel {
                        user_id: ActiveValue::Set(user_id),
                        planet_id: ActiveValue::Set(item_id),
                    },
                )
                .on_conflict(
                    OnConflict::columns([
                        entity::user_favorite_planet::Column::UserId,
                        entity::user_favorite_planet::Column::PlanetId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await
            }
        };

        match result {
            Ok(rows_affected) => Ok(rows_affected > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Removes an item from a user's favorites
    ///
    /// # Returns
    /// - `Ok(true)`: The favorite was removed
    /// - `Ok(false)`: The item was not in the user's favorites
    pub async fn remove(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        item_id: i32,
    ) -> Result<bool, DbErr> {
        let result = match kind {
            FavoriteKind::People => {
                entity::prelude::UserFavoritePeople::delete_by_id((user_id, item_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Planet => {
                entity::prelude::UserFavoritePlanet::delete_by_id((user_id, item_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }

    /// Gets the item IDs a user has favorited, ascending
    pub async fn get_item_ids_by_user_id(
        &self,
        user_id: i32,
        kind: FavoriteKind,
    ) -> Result<Vec<i32>, DbErr> {
        let item_ids = match kind {
            FavoriteKind::People => entity::prelude::UserFavoritePeople::find()
                .filter(entity::user_favorite_people::Column::UserId.eq(user_id))
                .order_by_asc(entity::user_favorite_people::Column::PeopleId)
                .all(self.db)
                .await?
                .into_iter()
                .map(|favorite| favorite.people_id)
                .collect(),
            FavoriteKind::Planet => entity::prelude::UserFavoritePlanet::find()
                .filter(entity::user_favorite_planet::Column::UserId.eq(user_id))
                .order_by_asc(entity::user_favorite_planet::Column::PlanetId)
                .all(self.db)
                .await?
                .into_iter()
                .map(|favorite| favorite.planet_id)
                .collect(),
        };

        Ok(item_ids)
    }

    /// Gets every favorite of the given kind as `(user_id, item_id)` pairs
    ///
    /// Ordered by user ID, then item ID.
    pub async fn get_all_item_ids(&self, kind: FavoriteKind) -> Result<Vec<(i32, i32)>, DbErr> {
        let pairs = match kind {
            FavoriteKind::People => entity::prelude::UserFavoritePeople::find()
                .order_by_asc(entity::user_favorite_people::Column::UserId)
                .order_by_asc(entity::user_favorite_people::Column::PeopleId)
                .all(self.db)
                .await?
                .into_iter()
                .map(|favorite| (favorite.user_id, favorite.people_id))
                .collect(),
            FavoriteKind::Planet => entity::prelude::UserFavoritePlanet::find()
                .order_by_asc(entity::user_favorite_planet::Column::UserId)
                .order_by_asc(entity::user_favorite_planet::Column::PlanetId)
                .all(self.db)
                .await?
                .into_iter()
                .map(|favorite| (favorite.user_id, favorite.planet_id))
                .collect(),
        };

        Ok(pairs)
    }

    /// Gets every favorite of the given kind resolved to the catalog entry's name
    ///
    /// Returns `(user_id, name)` pairs in catalog ID order. Favorites whose catalog entry
    /// no longer exists are skipped.
    pub async fn get_all_item_names(
        &self,
        kind: FavoriteKind,
    ) -> Result<Vec<(i32, String)>, DbErr> {
        let names = match kind {
            FavoriteKind::People => entity::prelude::UserFavoritePeople::find()
                .find_also_related(entity::prelude::People)
                .order_by_asc(entity::user_favorite_people::Column::PeopleId)
                .all(self.db)
                .await?
                .into_iter()
                .filter_map(|(favorite, person)| person.map(|p| (favorite.user_id, p.name)))
                .collect(),
            FavoriteKind::Planet => entity::prelude::UserFavoritePlanet::find()
                .find_also_related(entity::prelude::Planet)
                .order_by_asc(entity::user_favorite_planet::Column::PlanetId)
                .all(self.db)
                .await?
                .into_iter()
                .filter_map(|(favorite, planet)| planet.map(|p| (favorite.user_id, p.name)))
                .collect(),
        };

        Ok(names)
    }
}
