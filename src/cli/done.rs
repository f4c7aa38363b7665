//! tick done command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::load_context;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::TaskFilter;

pub struct DoneOptions {
    pub id: u64,
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct DoneOutput {
    id: u64,
    name: String,
    completed: bool,
}

pub fn run(options: DoneOptions) -> Result<()> {
    let mut ctx = load_context(options.dir, options.config)?;

    // Toggling an unknown id is a no-op in the list; the CLI reports it.
    if !ctx.store.toggle(options.id)? {
        return Err(Error::TaskNotFound(options.id));
    }

    let task = ctx
        .store
        .list()
        .get(options.id)
        .ok_or(Error::TaskNotFound(options.id))?;

    let output = DoneOutput {
        id: task.id,
        name: task.name.clone(),
        completed: task.completed,
    };

    let header = if task.completed {
        "Task completed"
    } else {
        "Task reopened"
    };
    let completed = ctx.store.list().view(TaskFilter::Completed).len();
    let total = ctx.store.list().len();

    let mut human = HumanOutput::new(header);
    human.push_summary("ID", task.id.to_string());
    human.push_summary("Name", task.name.clone());
    human.push_detail(format!("{completed} of {total} tasks completed"));

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "done",
        &output,
        Some(&human),
    )
}
