//! `taskcli done` command implementation

use anyhow::{Context, Result};
use std::io::Write;

use crate::task::{CompleteOutcome, TaskService};

pub fn run(service: &TaskService, args: &[String], out: &mut impl Write) -> Result<()> {
    let Some(id) = super::parse_task_id(args.first().map(String::as_str)) else {
        writeln!(out, "{}", super::INVALID_ID)?;
        return Ok(());
    };

    match service.complete(id).context("Failed to complete task")? {
        CompleteOutcome::Completed => writeln!(out, "✅ Marked task #{} as done.", id)?,
        CompleteOutcome::AlreadyDone => writeln!(out, "⚠️ Task #{} is already done.", id)?,
        CompleteOutcome::NotFound => writeln!(out, "❌ Task #{} not found.", id)?,
    }

    Ok(())
}
