//! Runtime configuration

use std::path::PathBuf;

use crate::cli::Cli;

/// Task file used when neither `--file` nor `TASKCLI_FILE` is given
pub const DEFAULT_DATA_FILE: &str = "tasks.json";

/// Environment variable that enables debug logging on stderr
pub const DEBUG_ENV: &str = "TASKCLI_DEBUG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the task collection is persisted
    pub data_file: PathBuf,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_file: cli.file.clone(),
        }
    }
}
