//! CLI command implementations
//!
//! The first word picks the command, matched case-insensitively. Argument
//! shape is checked here before the task service is touched; user mistakes
//! are reported as a single `❌` line and are not process failures.

pub mod add;
pub mod definition;
pub mod delete;
pub mod done;
pub mod list;

pub use definition::Cli;

use anyhow::Result;
use std::io::Write;

use crate::task::TaskService;

pub const USAGE: &str = "\
Usage:
  taskcli add \"Buy milk\"
  taskcli list
  taskcli list pending
  taskcli done 2
  taskcli delete 3
  taskcli help";

const MISSING_TITLE: &str = "❌ Please provide a task title.";
const INVALID_ID: &str = "❌ Please provide a numeric task ID.";

/// Dispatch one invocation's words to the matching command
pub fn run(service: &TaskService, args: &[String], out: &mut impl Write) -> Result<()> {
    let Some((command, rest)) = args.split_first() else {
        return print_help(out);
    };

    let command = command.to_lowercase();
    match command.as_str() {
        "add" => add::run(service, rest, out),
        "list" => list::run(service, rest, out),
        "done" => done::run(service, rest, out),
        "delete" => delete::run(service, rest, out),
        "help" | "-h" | "--help" => print_help(out),
        _ => {
            writeln!(out, "❌ Unknown command: {}", command)?;
            print_help(out)
        }
    }
}

pub fn print_help(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Simple Task Manager (CLI)\n")?;
    writeln!(out, "{}", USAGE)?;
    Ok(())
}

/// Parse a task id argument: ASCII digits only, within `u32`
pub fn parse_task_id(arg: Option<&str>) -> Option<u32> {
    let arg = arg?;
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}
