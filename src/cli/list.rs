//! tick list command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::load_context;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::task::{Task, TaskFilter};

pub struct ListOptions {
    pub view: Option<String>,
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    view: TaskFilter,
    total: usize,
    tasks: Vec<Task>,
}

pub fn run(options: ListOptions) -> Result<()> {
    let ctx = load_context(options.dir, options.config)?;

    let view: TaskFilter = options
        .view
        .unwrap_or_else(|| ctx.config.list.default_view.clone())
        .parse()?;

    let tasks: Vec<Task> = ctx.store.list().view(view).into_iter().cloned().collect();

    if options.json {
        let output = ListOutput {
            view,
            total: tasks.len(),
            tasks,
        };
        return emit_success(
            OutputOptions {
                json: true,
                quiet: options.quiet,
            },
            "list",
            &output,
            None,
        );
    }

    if !options.quiet {
        print_task_table(view, &tasks);
    }

    Ok(())
}

fn print_task_table(view: TaskFilter, tasks: &[Task]) {
    println!("Tasks (view: {})", view.as_str());
    println!();

    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }

    for task in tasks {
        let mark = if task.completed { "x" } else { " " };
        println!("  [{}] {:>3}  {}", mark, task.id, task.name);
    }
}
