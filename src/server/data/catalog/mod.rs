//! Repositories for the read-mostly people and planet catalogs.

pub mod people;
pub mod planet;
