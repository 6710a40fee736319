//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the repositories: they validate that
//! referenced records exist, turn missing records into [`NotFoundError`]s, run multi-step
//! mutations inside a transaction, and shape repository models into API DTOs.
//!
//! [`NotFoundError`]: crate::server::error::not_found::NotFoundError

pub mod catalog;
pub mod favorite;
pub mod user;
