mod cli;
mod config;
mod engine;
mod handlers;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use handlers::{display_mode, repl, run, serve};
use std::env;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cwd = env::current_dir().context("Failed to read current directory")?;
    let config = config::load_config(&cwd)?;

    match cli.command {
        None => repl::handle_repl(cwd, &config, display_mode(cli.no_color, &config)),
        Some(Commands::Serve { host, port }) => serve::handle_serve(cwd, &config, host, port),
        Some(Commands::Run { words }) => run::handle_run(cwd, &words.join(" "), display_mode(cli.no_color, &config)),
    }
}
