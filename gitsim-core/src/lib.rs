//! # gitsim-core
//!
//! Core library for gitsim - a command interpreter over an in-memory model of
//! a git repository.
//!
//! Input lines are parsed into [`parser::Command`]s, applied to a
//! [`Repository`] by per-command handlers, and recorded in a [`Console`]
//! transcript. Nothing touches a real repository, filesystem or network.
//!
//! ```
//! use gitsim_core::Simulator;
//!
//! let mut sim = Simulator::default();
//! sim.execute("git add .");
//! sim.execute(r#"git commit -m "Initial commit""#);
//!
//! assert_eq!(sim.repository().commits().len(), 1);
//! ```

pub mod config;
pub mod console;
pub mod diff;
pub mod error;
mod handlers;
pub mod help;
pub mod ident;
pub mod models;
pub mod parser;
pub mod repository;
pub mod seed;
pub mod settings;
pub mod simulator;

pub use config::GitConfig;
pub use console::Console;
pub use error::{BranchLookup, Error, Result};
pub use ident::{IdSource, RandomIds, SequentialIds};
pub use models::{Commit, LogEntry, LogKind, Signature};
pub use repository::Repository;
pub use seed::{SeedCommit, SeedState};
pub use settings::Settings;
pub use simulator::Simulator;
