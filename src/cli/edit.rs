//! tick edit command implementation.
//!
//! Editing is a two-step flow in the library (begin, then save with a
//! pending name); the CLI composes both steps into one command.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::load_context;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::EditSession;

pub struct EditOptions {
    pub id: u64,
    pub name: String,
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct EditOutput {
    id: u64,
    name: String,
}

pub fn run(options: EditOptions) -> Result<()> {
    let mut ctx = load_context(options.dir, options.config)?;

    let previous = ctx
        .store
        .list()
        .get(options.id)
        .map(|task| task.name.clone())
        .ok_or(Error::TaskNotFound(options.id))?;

    let mut session = EditSession::new();
    session.begin(options.id, &previous);
    session.set_pending(options.name);

    if ctx.store.save_edit(&mut session)?.is_none() {
        return Err(Error::InvalidArgument(
            "task name cannot be empty".to_string(),
        ));
    }

    let name = ctx
        .store
        .list()
        .get(options.id)
        .map(|task| task.name.clone())
        .ok_or(Error::TaskNotFound(options.id))?;

    let output = EditOutput {
        id: options.id,
        name: name.clone(),
    };

    let mut human = HumanOutput::new("Task renamed");
    human.push_summary("ID", options.id.to_string());
    human.push_summary("From", previous);
    human.push_summary("To", name);

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "edit",
        &output,
        Some(&human),
    )
}
