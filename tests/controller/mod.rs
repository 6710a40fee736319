//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes, response
//! bodies, and error handling for every API endpoint.

mod favorite;
mod people;
mod user;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::model::app::AppState;
use holonet_test_utils::prelude::*;

use crate::util::{body_json, seeded};
