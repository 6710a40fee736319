//! Shared helpers for integration tests.

use axum::{body::to_bytes, response::Response};
use holonet::server::seed::seed_database;
use holonet_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Test context with every table created and the seed catalogs & users inserted
pub async fn seeded() -> Result<TestContext, TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    seed_database(&test.db).await?;

    Ok(test)
}

/// Reads a response body and deserializes it from JSON
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
