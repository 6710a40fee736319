//! Test fixture modules for database record creation.
//!
//! - `catalog` - People & planet catalog entries
//! - `user` - Users and their favorites

pub mod catalog;
pub mod user;
