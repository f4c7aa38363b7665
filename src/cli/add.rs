//! tick add command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::load_context;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct AddOptions {
    pub name: String,
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct AddOutput {
    id: u64,
    name: String,
    completed: bool,
    total: usize,
}

pub fn run(options: AddOptions) -> Result<()> {
    let mut ctx = load_context(options.dir, options.config)?;
    let fresh = !ctx.store.storage().tasks_file().exists();

    // The list itself treats an empty name as a no-op; surfacing the
    // rejection is this presentation layer's choice.
    let task = ctx.store.add(&options.name)?.ok_or_else(|| {
        Error::InvalidArgument("task name cannot be empty".to_string())
    })?;

    let output = AddOutput {
        id: task.id,
        name: task.name.clone(),
        completed: task.completed,
        total: ctx.store.list().len(),
    };

    let mut human = HumanOutput::new("Task added");
    human.push_summary("ID", task.id.to_string());
    human.push_summary("Name", task.name);
    if fresh {
        human.push_warning("no snapshot found; starting a new task list");
        human.push_next_step("tick list");
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &output,
        Some(&human),
    )
}
