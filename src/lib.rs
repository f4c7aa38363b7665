//! tick - Task List Library
//!
//! This library provides the core functionality for the tick CLI tool,
//! a single-user task list manager with a persisted JSON snapshot.
//!
//! # Core Concepts
//!
//! - **Task**: a to-do entry with an id, a name, and a completion flag
//! - **Task List**: the ordered collection, insertion order preserved
//! - **Views**: pure projections by completion status (all, active, completed)
//! - **Snapshot**: the full collection serialized to disk on every mutation
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `tick.toml`
//! - `error`: Error types and result aliases
//! - `output`: Shared CLI output formatting
//! - `storage`: Snapshot file storage with atomic writes
//! - `task`: Task list, edit sessions, and the persisted store

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod task;

pub use error::{Error, Result};
