//! UCI turn loop.
//!
//! The session owns the game position and hands it to the engine for one
//! decision at a time. Protocol output goes to the supplied writer; anything
//! diagnostic goes through `tracing` so stdout stays clean.

use std::io::{self, BufRead, Write};

use chess_core::{move_to_uci, set_position_from_uci, Engine, GameState, Position};
use minimax_engine::{SearchConfig, MATE_SCORE};
use tracing::{debug, info, warn};

/// Scores this close to `MATE_SCORE` are reported as mate distances.
const MATE_WINDOW: i32 = 1_000;

const MAX_DEPTH: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct UciSession<E: Engine> {
    engine: E,
    pos: Position,
    depth: u8,
    terminal_scoring: bool,
}

impl<E: Engine> UciSession<E> {
    /// `config` must be the one `engine` was built with; the session only
    /// mirrors the values it advertises in the `uci` reply.
    pub fn new(engine: E, config: &SearchConfig) -> Self {
        Self {
            engine,
            pos: Position::startpos(),
            depth: config.depth,
            terminal_scoring: config.terminal_scoring,
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        for line in input.lines() {
            if self.handle_line(&line?, &mut out)? == Control::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Control> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(Control::Continue);
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
                    self.depth
                )?;
                writeln!(
                    out,
                    "option name TerminalScoring type check default {}",
                    self.terminal_scoring
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(args),
            "ucinewgame" => {
                self.pos = Position::startpos();
                self.engine.new_game();
            }
            "position" => match set_position_from_uci(args) {
                Ok(pos) => self.pos = pos,
                Err(err) => {
                    warn!(%err, "ignoring position command");
                    writeln!(out, "info string {err}")?;
                }
            },
            "go" => self.go(args, out)?,
            "quit" => return Ok(Control::Quit),
            other => debug!(command = other, "ignoring unknown command"),
        }
        out.flush()?;
        Ok(Control::Continue)
    }

    /// `setoption name <name...> value <value...>`
    fn set_option(&mut self, args: &[&str]) {
        let value_at = args.iter().position(|&a| a == "value");
        let name = match args.split_first() {
            Some((&"name", rest)) => rest[..value_at.map_or(rest.len(), |i| i - 1)].join(" "),
            _ => {
                warn!(?args, "setoption without a name");
                return;
            }
        };
        let value = value_at.map(|i| args[i + 1..].join(" ")).unwrap_or_default();

        if !self.engine.set_option(&name, &value) {
            warn!(%name, %value, "unsupported option");
            return;
        }
        if name.eq_ignore_ascii_case("depth") {
            if let Ok(depth) = value.parse::<u8>() {
                self.depth = depth.min(MAX_DEPTH);
            }
        } else if name.eq_ignore_ascii_case("terminalscoring") {
            self.terminal_scoring = value.eq_ignore_ascii_case("true");
        }
        info!(%name, %value, "option set");
    }

    fn go<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let depth = match args {
            ["depth", n, ..] => n
                .parse::<u8>()
                .ok()
                .filter(|&d| d > 0)
                .unwrap_or(self.depth),
            _ => self.depth,
        };

        if !self.pos.has_legal_moves() {
            return writeln!(out, "bestmove 0000");
        }

        match self.engine.search(&mut self.pos, depth) {
            Ok(result) => {
                writeln!(
                    out,
                    "info depth {} score {} nodes {}",
                    result.depth,
                    format_score(result.score),
                    result.nodes
                )?;
                writeln!(out, "bestmove {}", move_to_uci(self.pos.board(), result.best_move))
            }
            Err(err) => {
                warn!(%err, "search failed");
                writeln!(out, "bestmove 0000")
            }
        }
    }
}

/// UCI `score` field: `mate N` for forced mates, `cp N` otherwise.
pub fn format_score(score: i32) -> String {
    let magnitude = score.abs();
    if magnitude >= MATE_SCORE - MATE_WINDOW && magnitude <= MATE_SCORE {
        let moves = (MATE_SCORE - magnitude + 1) / 2;
        if score > 0 {
            format!("mate {moves}")
        } else {
            format!("mate -{moves}")
        }
    } else {
        format!("cp {score}")
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
