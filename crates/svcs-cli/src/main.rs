use std::io::{self, IsTerminal};

use clap::Parser;
use tracing::Level;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    if !stdout.is_terminal() {
        colored::control::set_override(false);
    }
    commands::run_command(cli, &mut stdout.lock())
}
