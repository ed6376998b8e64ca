//! taskcli - track short tasks in a local JSON file

use anyhow::Result;
use clap::Parser;
use taskcli::cli::{self, Cli};
use taskcli::config::{Config, DEBUG_ENV};
use taskcli::task::{Store, TaskService};

fn main() -> Result<()> {
    if std::env::var(DEBUG_ENV).is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskcli=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    let service = TaskService::new(Store::new(config.data_file));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&service, &cli.args, &mut out)
}
