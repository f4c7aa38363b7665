//! Command-line interface for tick
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::storage::Storage;
use crate::task::TaskStore;

mod add;
mod done;
mod edit;
mod list;
mod rm;

/// tick - a local task list manager
///
/// Add, edit, complete, and remove named tasks; view them filtered by
/// completion status; the list persists as a JSON snapshot on disk.
#[derive(Parser, Debug)]
#[command(name = "tick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the task snapshot (defaults to the platform data dir)
    #[arg(long, global = true, env = "TICK_DIR")]
    pub dir: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long, global = true, env = "TICK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task name
        name: String,
    },

    /// List tasks
    List {
        /// View to show: all, active, or completed
        #[arg(long)]
        view: Option<String>,
    },

    /// Toggle a task's completion status
    Done {
        /// Task id
        id: u64,
    },

    /// Remove a task
    Rm {
        /// Task id
        id: u64,
    },

    /// Rename a task
    Edit {
        /// Task id
        id: u64,

        /// New task name
        name: String,
    },
}

/// Loaded config plus the opened task store, shared by every command.
pub(crate) struct Context {
    pub config: Config,
    pub store: TaskStore,
}

pub(crate) fn load_context(dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Context> {
    let config = Config::load_default(config_path.as_deref())?;
    let storage = Storage::resolve(dir, &config)?;
    let store = TaskStore::open(storage)?;
    Ok(Context { config, store })
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add { name } => add::run(add::AddOptions {
                name,
                dir: self.dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { view } => list::run(list::ListOptions {
                view,
                dir: self.dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Done { id } => done::run(done::DoneOptions {
                id,
                dir: self.dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Rm { id } => rm::run(rm::RmOptions {
                id,
                dir: self.dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Edit { id, name } => edit::run(edit::EditOptions {
                id,
                name,
                dir: self.dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
