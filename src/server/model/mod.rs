//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to HTTP handlers, type
//! aliases for the SeaORM entity models, the favorite kind selector, and the insert
//! payloads used when seeding the catalogs and users.

pub mod app;
pub mod catalog;
pub mod db;
pub mod favorite;
pub mod user;
