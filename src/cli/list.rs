//! `taskcli list` command implementation

use anyhow::{Context, Result};
use std::io::Write;

use crate::task::{ListFilter, TaskService};

pub fn run(service: &TaskService, args: &[String], out: &mut impl Write) -> Result<()> {
    let filter = match args.first() {
        Some(arg) if arg.to_lowercase() == "pending" => ListFilter::PendingOnly,
        _ => ListFilter::All,
    };

    let listing = service.list(filter).context("Failed to list tasks")?;
    if listing.total() == 0 {
        writeln!(out, "📭 No tasks found.")?;
        return Ok(());
    }

    // A filter that matches nothing prints nothing.
    for task in listing {
        writeln!(out, "{}", task.to_list_line())?;
    }

    Ok(())
}
