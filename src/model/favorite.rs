use serde::{Deserialize, Serialize};

/// A user's favorites resolved to catalog display names
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    /// ID of the user
    pub user_id: i32,
    /// Display name of the user
    pub name: String,
    /// Names of favorite people, in catalog order
    pub favorites_people: Vec<String>,
    /// Names of favorite planets, in catalog order
    pub favorites_planets: Vec<String>,
}

/// Response to adding or removing a favorite person
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePeopleDto {
    /// Describes the change that was made
    pub message: String,
    /// The user's favorite person IDs after the change, ascending
    pub favorites_people: Vec<i32>,
}

/// Response to adding or removing a favorite planet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePlanetsDto {
    /// Describes the change that was made
    pub message: String,
    /// The user's favorite planet IDs after the change, ascending
    pub favorites_planets: Vec<i32>,
}
