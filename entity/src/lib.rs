//! SeaORM entities for the holonet catalogs, users, and favorite join tables.

pub mod prelude;

pub mod people;
pub mod planet;
pub mod user;
pub mod user_favorite_people;
pub mod user_favorite_planet;
