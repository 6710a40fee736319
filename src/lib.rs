//! holonet: a REST backend serving Star Wars people & planet catalogs and
//! tracking which catalog entries each user has favorited.

pub mod model;
pub mod server;
