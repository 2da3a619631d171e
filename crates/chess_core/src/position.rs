use cozy_chess::{Board, GameStatus, Move, Piece};

use crate::error::PositionError;
use crate::rules::GameState;
use crate::types::*;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A chess position with make/unmake on top of `cozy_chess::Board`.
///
/// The board itself is copy-make; the position keeps the boards it left
/// behind so moves can be taken back in place and so repetitions can be seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    history: Vec<Undo>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Undo {
    board: Board,
    mv: Move,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        Position {
            board,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board = Board::from_fen(fen.trim(), false).map_err(|err| PositionError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{err:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves applied since this position was set up.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|undo| undo.mv)
    }

    pub fn position_hash(&self) -> u64 {
        self.board.hash()
    }

    /// Generate all legal moves, returning a freshly allocated vector.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.legal_moves_into(&mut out);
        out
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// The current position occurred at least twice before within the
    /// reversible part of the move history.
    pub fn is_threefold_repetition(&self) -> bool {
        let key = self.board.hash();
        let window = self.board.halfmove_clock() as usize;
        let earlier = self
            .history
            .iter()
            .rev()
            .take(window)
            .filter(|undo| undo.board.hash() == key)
            .count();
        earlier >= 2
    }

    /// Neither side can possibly deliver mate: bare kings, a single minor
    /// piece, or bishops that all stand on one square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let board = &self.board;
        let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = board.pieces(Piece::Knight).len();
        let bishops = board.pieces(Piece::Bishop);
        match (knights, bishops.len()) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (0, _) => {
                let mut shades = bishops
                    .into_iter()
                    .map(|sq| (sq.file() as usize + sq.rank() as usize) % 2);
                let first = shades.next();
                shades.all(|shade| Some(shade) == first)
            }
            _ => false,
        }
    }
}

impl GameState for Position {
    type Move = Move;

    fn legal_moves_into(&self, out: &mut Vec<Move>) {
        out.clear();
        self.board.generate_moves(|moves| {
            out.extend(moves);
            false
        });
    }

    fn apply_move(&mut self, mv: Move) {
        assert!(
            self.board.is_legal(mv),
            "apply_move: {mv} is not legal in the current position"
        );
        let before = self.board.clone();
        self.board.play_unchecked(mv);
        self.history.push(Undo { board: before, mv });
    }

    fn undo_move(&mut self, mv: Move) {
        let undo = match self.history.pop() {
            Some(undo) => undo,
            None => panic!("undo_move: {mv} was never applied (history is empty)"),
        };
        assert_eq!(
            undo.mv, mv,
            "undo_move: out of LIFO order, last applied move was {}",
            undo.mv
        );
        self.board = undo.board;
    }

    fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|_| true)
    }

    fn is_checkmate(&self) -> bool {
        matches!(self.board.status(), GameStatus::Won)
    }

    fn is_draw(&self) -> bool {
        matches!(self.board.status(), GameStatus::Drawn)
            || self.is_fifty_move_draw()
            || self.is_threefold_repetition()
            || self.is_insufficient_material()
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn piece_count(&self, color: Color, kind: PieceKind) -> u32 {
        self.board.colored_pieces(color.into(), kind.into()).len()
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
