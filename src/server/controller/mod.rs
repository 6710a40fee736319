//! HTTP controller endpoints for the holonet web API.
//!
//! This module contains Axum handlers for the people & planet catalogs, users, and
//! favorites management. Controllers validate path IDs, call into the service layer, and
//! return JSON responses. They use utoipa for OpenAPI documentation.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
pub mod util;
