//! The rules interface the search engine is written against.
//!
//! Anything that can enumerate legal moves, play them in place and take them
//! back again can be searched. `Position` is the chess implementation; tests
//! also drive the search with small synthetic game trees.

use std::fmt::Debug;

use crate::types::{Color, PieceKind};

/// A mutable two-player game state with in-place make/unmake.
pub trait GameState {
    /// Opaque move handle. Only values produced by `legal_moves_into` may be
    /// passed back to `apply_move`.
    type Move: Copy + Eq + Debug;

    /// Clears `out` and fills it with every legal move for the side to move.
    fn legal_moves_into(&self, out: &mut Vec<Self::Move>);

    /// Plays `mv` on this state.
    fn apply_move(&mut self, mv: Self::Move);

    /// Reverts the most recent `apply_move`, which must have been `mv`.
    ///
    /// Calls must mirror applies in strict LIFO order. Implementations panic
    /// when that contract is broken instead of continuing with a corrupted
    /// state.
    fn undo_move(&mut self, mv: Self::Move);

    /// The side to move has no legal moves and is in check.
    fn is_checkmate(&self) -> bool;

    /// The game is drawn in this state (stalemate or a rule-based draw).
    fn is_draw(&self) -> bool;

    fn side_to_move(&self) -> Color;

    /// Number of pieces of `kind` owned by `color`.
    fn piece_count(&self, color: Color, kind: PieceKind) -> u32;

    fn has_legal_moves(&self) -> bool {
        let mut moves = Vec::new();
        self.legal_moves_into(&mut moves);
        !moves.is_empty()
    }
}
