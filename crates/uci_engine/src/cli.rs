use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fixed-depth minimax chess bot", long_about = None)]
pub struct Cli {
    /// TOML file with a `[search]` table and an optional `log_filter`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Search depth in plies, overrides the config file
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub depth: Option<u8>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Speak UCI on stdin/stdout (the default)
    Uci,
    /// Search a single position and print the result
    Analyse {
        /// Position to search, the initial position when omitted
        #[arg(long)]
        fen: Option<String>,

        /// Moves in UCI notation to play from the position first
        #[arg(long, num_args = 1..)]
        moves: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
