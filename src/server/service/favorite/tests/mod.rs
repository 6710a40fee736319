
use holonet_test_utils::prelude::*;

use crate::server::{
    error::{not_found::NotFoundError, Error},
    model::favorite::FavoriteKind,
    seed::seed_database,
    service::favorite::FavoriteService,
};

/// Test context with all tables created and the seed catalogs & users inserted
async fn seeded() -> Result<TestContext, TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    seed_database(&test.db).await?;

    Ok(test)
}
