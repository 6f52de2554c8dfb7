//! # gitsim-server
//!
//! Hosts independent simulator sessions behind a small JSON API, so a
//! browser front end or the SDK can drive them.

pub mod api;
pub mod server;

pub use api::{create_router, AppState};
pub use server::SimServer;
