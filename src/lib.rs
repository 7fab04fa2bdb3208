//! A local, single-user snapshot version control system.
//!
//! - `areas`: on-disk areas of a repository (object store, index, branches, working directory)
//! - `artifacts`: value types and algorithms working on them
//! - `commands`: one `impl Repository` block per command
//! - `config`: environment-driven settings
//! - `error`: user-facing error taxonomy
//! - `logging`: diagnostic output setup for the binary

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
