//! Life Timer
//!
//! Command line shell around the countdown engine: saves the profile,
//! renders ticks, and drives the once-per-second countdown.

mod args;
mod commands;
mod config;
mod render;
mod state;

use std::io::IsTerminal;

use args::{Cli, Command};
use clap::Parser;
use config::AppConfig;
use state::AppState;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Rendered output owns stdout; logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::resolve(&cli.config)?;
    debug!("Using data file {}", config.data_file.display());
    let state = AppState::new(config);

    match cli.command {
        Command::Init(args) => commands::profile::init(&state, args),
        Command::Show(args) => commands::countdown::show(&state, args),
        Command::Watch(args) => commands::countdown::watch(&state, args),
        Command::Clear => commands::profile::clear(&state),
        Command::Config => commands::config::get_config(&state),
    }
}
