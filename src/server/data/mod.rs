//! Data access layer repositories.
//!
//! This module contains the SeaORM repositories for the application. Repositories are
//! generic over [`sea_orm::ConnectionTrait`] so services can run them either directly
//! against the connection pool or inside a transaction.

pub mod catalog;
pub mod user;
