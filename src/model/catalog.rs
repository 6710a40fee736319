use serde::{Deserialize, Serialize};

/// A person from the people catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonDto {
    /// Unique person ID
    pub id: i32,
    /// Display name
    pub name: String,
    /// Known locations
    pub locations: String,
    /// Gender
    pub gender: String,
    /// Physical dimensions, e.g. height
    pub dimensions: String,
    /// Weapons carried
    pub weapons: String,
}

/// A planet from the planet catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    /// Unique planet ID
    pub id: i32,
    /// Display name
    pub name: String,
    /// Productions the planet appears in
    pub appearances: String,
}
