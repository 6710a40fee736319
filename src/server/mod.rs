//! Server application core modules.
//!
//! This module contains all server-side functionality for holonet: HTTP routing and
//! controllers, the service layer implementing catalog lookups and favorites management,
//! SeaORM repositories over the catalog, user, and favorite join tables, startup wiring,
//! and the seed data loaded on first run.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
