//! `taskcli delete` command implementation

use anyhow::{Context, Result};
use std::io::Write;

use crate::task::{DeleteOutcome, TaskService};

pub fn run(service: &TaskService, args: &[String], out: &mut impl Write) -> Result<()> {
    let Some(id) = super::parse_task_id(args.first().map(String::as_str)) else {
        writeln!(out, "{}", super::INVALID_ID)?;
        return Ok(());
    };

    match service.delete(id).context("Failed to delete task")? {
        DeleteOutcome::Deleted => writeln!(out, "🗑️ Deleted task #{}.", id)?,
        DeleteOutcome::NotFound => writeln!(out, "❌ Task #{} not found.", id)?,
    }

    Ok(())
}
