//! One-shot search of a single position.

use std::fmt;

use anyhow::{bail, Context};
use chess_core::{move_to_uci, parse_uci_move, Color, Engine, GameState, Position};
use serde::Serialize;

use crate::session::format_score;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Position that was searched, after any `--moves`
    pub fen: String,
    pub side_to_move: &'static str,
    pub best_move: String,
    /// Centipawns from the side to move's point of view
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub leaves: u64,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "position   {}", self.fen)?;
        writeln!(f, "to move    {}", self.side_to_move)?;
        writeln!(f, "best move  {}", self.best_move)?;
        writeln!(f, "score      {}", format_score(self.score))?;
        write!(
            f,
            "searched   depth {}, {} nodes, {} leaves",
            self.depth, self.nodes, self.leaves
        )
    }
}

/// Sets up the position from `fen` (or the initial position), plays `moves`
/// and asks `engine` for a move at `depth`.
pub fn analyse<E: Engine>(
    engine: &mut E,
    fen: Option<&str>,
    moves: &[String],
    depth: u8,
) -> anyhow::Result<Analysis> {
    let mut pos = match fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::startpos(),
    };
    for txt in moves {
        let mv = parse_uci_move(&pos, txt).with_context(|| format!("after {} plies", pos.ply()))?;
        pos.apply_move(mv);
    }

    if pos.is_checkmate() {
        bail!("the side to move is checkmated");
    }
    if !pos.has_legal_moves() {
        bail!("the side to move is stalemated");
    }

    let result = engine.search(&mut pos, depth)?;
    Ok(Analysis {
        fen: pos.board().to_string(),
        side_to_move: match pos.side_to_move() {
            Color::White => "white",
            Color::Black => "black",
        },
        best_move: move_to_uci(pos.board(), result.best_move),
        score: result.score,
        depth: result.depth,
        nodes: result.nodes,
        leaves: result.leaves,
    })
}

#[cfg(test)]
#[path = "analyse_tests.rs"]
mod analyse_tests;
