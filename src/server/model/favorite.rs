//! Selector for the two kinds of favorites.

use std::fmt;

use crate::server::error::not_found::NotFoundError;

/// Which catalog a favorite refers to.
///
/// Selects both the catalog an item ID is validated against and the join table the
/// favorite is stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteKind {
    /// The people catalog, stored in `user_favorite_people`
    People,
    /// The planet catalog, stored in `user_favorite_planet`
    Planet,
}

impl FavoriteKind {
    /// Error for an item ID missing from this kind's catalog
    pub fn item_not_found(self, item_id: i32) -> NotFoundError {
        match self {
            Self::People => NotFoundError::Person(item_id),
            Self::Planet => NotFoundError::Planet(item_id),
        }
    }

    /// Error for an item ID missing from a user's favorites of this kind
    pub fn not_in_favorites(self, user_id: i32, item_id: i32) -> NotFoundError {
        match self {
            Self::People => NotFoundError::PersonNotInFavorites {
                user_id,
                person_id: item_id,
            },
            Self::Planet => NotFoundError::PlanetNotInFavorites {
                user_id,
                planet_id: item_id,
            },
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::People => write!(f, "person"),
            Self::Planet => write!(f, "planet"),
        }
    }
}
