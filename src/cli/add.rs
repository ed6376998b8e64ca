//! `taskcli add` command implementation

use anyhow::{Context, Result};
use std::io::Write;

use crate::task::TaskService;

pub fn run(service: &TaskService, args: &[String], out: &mut impl Write) -> Result<()> {
    let title = args.join(" ");
    if title.trim().is_empty() {
        writeln!(out, "{}", super::MISSING_TITLE)?;
        return Ok(());
    }

    let task = service.add(&title).context("Failed to add task")?;
    writeln!(out, "✅ Added task #{}: {}", task.id, task.title)?;
    Ok(())
}
