//! taskcli library - task store, task operations and command routing

pub mod cli;
pub mod config;
pub mod task;
