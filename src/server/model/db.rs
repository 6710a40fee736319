//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the application, so
//! type signatures don't need to reach into the `entity` crate directly.

/// Type alias for a person catalog record.
///
/// # Fields (from `entity::people::Model`)
/// - `id` - Primary key, unique person identifier
/// - `name` - Display name
/// - `locations` - Known locations
/// - `gender` - Gender
/// - `dimensions` - Physical dimensions, e.g. height
/// - `weapons` - Weapons carried
pub type PersonModel = entity::people::Model;

/// Type alias for a planet catalog record.
///
/// # Fields (from `entity::planet::Model`)
/// - `id` - Primary key, unique planet identifier
/// - `name` - Display name
/// - `appearances` - Productions the planet appears in
pub type PlanetModel = entity::planet::Model;
