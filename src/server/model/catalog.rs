//! Insert payloads for the people & planet catalogs.

/// Fields for inserting a person into the catalog
#[derive(Clone, Debug)]
pub struct NewPerson {
    /// Display name
    pub name: String,
    /// Known locations
    pub locations: String,
    /// Gender
    pub gender: String,
    /// Physical dimensions
    pub dimensions: String,
    /// Weapons carried
    pub weapons: String,
}

/// Fields for inserting a planet into the catalog
#[derive(Clone, Debug)]
pub struct NewPlanet {
    /// Display name
    pub name: String,
    /// Productions the planet appears in
    pub appearances: String,
}
