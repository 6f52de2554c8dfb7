//! # gitsim
//!
//! Interactive simulator for learning git commands.
//!
//! This crate re-exports the workspace members: the interpreter in
//! [`core`], the HTTP API in [`server`] and the client in [`sdk`].

pub use gitsim_core as core;
pub use gitsim_sdk as sdk;
pub use gitsim_server as server;
