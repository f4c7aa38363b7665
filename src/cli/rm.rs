//! tick rm command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::load_context;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct RmOptions {
    pub id: u64,
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct RmOutput {
    id: u64,
    remaining: usize,
}

pub fn run(options: RmOptions) -> Result<()> {
    let mut ctx = load_context(options.dir, options.config)?;

    if !ctx.store.remove(options.id)? {
        return Err(Error::TaskNotFound(options.id));
    }

    let output = RmOutput {
        id: options.id,
        remaining: ctx.store.list().len(),
    };

    let mut human = HumanOutput::new("Task removed");
    human.push_summary("ID", options.id.to_string());
    human.push_summary("Remaining", output.remaining.to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "rm",
        &output,
        Some(&human),
    )
}
