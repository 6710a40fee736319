use serde::{Deserialize, Serialize};

/// A user along with the IDs of the catalog entries they have favorited
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    /// Unique user ID
    pub id: i32,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Whether the account is active
    pub is_active: bool,
    /// Favorite person IDs, ascending
    pub favorites_people: Vec<i32>,
    /// Favorite planet IDs, ascending
    pub favorites_planets: Vec<i32>,
}
