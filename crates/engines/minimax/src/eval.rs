//! Material-based position evaluation

use chess_core::{Color, GameState, PieceKind};

/// Centipawn score. Positive favours the side the score is oriented to.
pub type Score = i32;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [Score; 6] = [100, 300, 300, 500, 900, 0];

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.idx()]
}

/// Leaf scoring for the search.
///
/// Implementations must be pure: the same state always yields the same
/// score, and the state is never modified. Scores are absolute, White minus
/// Black; the search orients them.
pub trait Evaluator<G: ?Sized> {
    fn evaluate(&self, pos: &G) -> Score;
}

/// Counts material and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Material;

impl<G: GameState + ?Sized> Evaluator<G> for Material {
    fn evaluate(&self, pos: &G) -> Score {
        PieceKind::ALL
            .iter()
            .map(|&kind| {
                let white = pos.piece_count(Color::White, kind) as Score;
                let black = pos.piece_count(Color::Black, kind) as Score;
                piece_value(kind) * (white - black)
            })
            .sum()
    }
}

/// Evaluates the position as White's material minus Black's material.
///
/// Returns a score in centipawns:
/// - Positive = White is ahead
/// - Negative = Black is ahead
/// - 0 = material is level
pub fn evaluate<G: GameState + ?Sized>(pos: &G) -> Score {
    Material.evaluate(pos)
}

/// Re-orients an absolute score to `side`'s point of view.
#[inline]
pub fn relative_to(score: Score, side: Color) -> Score {
    match side {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
