//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_DATA_FILE;

/// Only `-f/--file` is parsed here; every other word, dashed or not, goes to
/// the command router, which owns help and unknown-command output.
#[derive(Parser, Debug)]
#[command(name = "taskcli")]
#[command(about = "Track short tasks in a local JSON file")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Task file to read and write
    #[arg(
        short = 'f',
        long = "file",
        env = "TASKCLI_FILE",
        default_value = DEFAULT_DATA_FILE
    )]
    pub file: PathBuf,

    /// Command (add, list, done, delete, help) and its arguments
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
