mod analyse;
mod cli;
mod config;
mod session;

use std::io;

use anyhow::Context;
use clap::Parser;
use minimax_engine::MinimaxEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::BotConfig;
use crate::session::UciSession;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BotConfig::load(path)?,
        None => BotConfig::default(),
    };
    init_tracing(config.log_filter.as_deref())?;

    let mut search = config.search;
    if let Some(depth) = cli.depth {
        search.depth = depth;
    }
    let depth = search.depth;
    let mut engine = MinimaxEngine::with_config(search.clone());

    match cli.command.unwrap_or(Command::Uci) {
        Command::Uci => {
            let mut session = UciSession::new(engine, &search);
            info!(depth = session.depth(), "starting UCI session");
            // UCI engines communicate via stdin/stdout.
            let stdin = io::stdin();
            let stdout = io::stdout();
            session
                .run(stdin.lock(), stdout.lock())
                .context("UCI session failed")?;
            info!(plies = session.position().ply(), "UCI session finished");
        }
        Command::Analyse { fen, moves, json } => {
            let analysis = analyse::analyse(&mut engine, fen.as_deref(), &moves, depth)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{analysis}");
            }
        }
    }
    Ok(())
}

/// Logs go to stderr; stdout belongs to the protocol.
fn init_tracing(fallback: Option<&str>) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback.unwrap_or("info"))
            .context("invalid log_filter in config")?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
