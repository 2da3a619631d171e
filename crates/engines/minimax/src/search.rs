//! Depth-limited minimax with alpha-beta pruning

use chess_core::{Color, GameState, SearchError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::eval::{relative_to, Evaluator, Material, Score};

/// Bound used for the initial search window and for "no move" sentinels.
pub const INFINITY: Score = 1_000_000;

/// Score of a checkmate at the root; reduced by one per ply of distance.
pub const MATE_SCORE: Score = 100_000;

/// Best root move together with the work it took to find it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub best_move: M,
    /// Minimax value of `best_move` from the searching side's point of view
    pub score: Score,
    pub nodes: u64,
    pub leaves: u64,
}

/// Alpha-beta searcher over any `GameState`.
///
/// The searcher owns no position. It borrows one mutably for the duration of
/// a call, plays moves on it and takes every one of them back before
/// returning. Move lists are kept per ply and reused between siblings.
pub struct Searcher<'a, G: GameState, E> {
    evaluator: &'a E,
    config: &'a SearchConfig,
    tie_break: Option<&'a mut StdRng>,
    /// Side whose score is being maximized
    perspective: Color,
    nodes: u64,
    leaves: u64,
    buffers: Vec<Vec<G::Move>>,
}

impl<'a, G: GameState, E: Evaluator<G>> Searcher<'a, G, E> {
    pub fn new(evaluator: &'a E, config: &'a SearchConfig) -> Self {
        Self {
            evaluator,
            config,
            tie_break: None,
            perspective: Color::White,
            nodes: 0,
            leaves: 0,
            buffers: Vec::new(),
        }
    }

    /// Breaks exact ties at the root with `rng` instead of taking the first
    /// move. Root moves are then searched with a full window so that tied
    /// scores are exact rather than bounds.
    pub fn with_tie_breaker(mut self, rng: &'a mut StdRng) -> Self {
        self.tie_break = Some(rng);
        self
    }

    /// Orients leaf and terminal scores for direct `alphabeta` calls.
    /// `search` sets this to the side to move at the root.
    pub fn set_perspective(&mut self, side: Color) {
        self.perspective = side;
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn leaves(&self) -> u64 {
        self.leaves
    }

    /// Picks the move with the highest minimax value for the side to move.
    ///
    /// Ties keep the first move in the order the rules layer produced them,
    /// unless a tie breaker was supplied.
    pub fn search(&mut self, pos: &mut G, depth: u8) -> Result<SearchOutcome<G::Move>, SearchError> {
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }

        let mut moves = self.take_buffer(0);
        pos.legal_moves_into(&mut moves);
        if moves.is_empty() {
            self.buffers[0] = moves;
            return Err(SearchError::NoLegalMoves);
        }

        self.perspective = pos.side_to_move();
        self.nodes = 0;
        self.leaves = 0;

        let narrow_root = self.config.pruning && self.tie_break.is_none();
        let mut best_score = -INFINITY;
        let mut tied: Vec<G::Move> = Vec::new();

        for &mv in &moves {
            let alpha = if narrow_root { best_score } else { -INFINITY };

            pos.apply_move(mv);
            let score = self.alphabeta_at(pos, depth - 1, 1, alpha, INFINITY, false);
            pos.undo_move(mv);

            trace!(?mv, score, "root move");
            if tied.is_empty() || score > best_score {
                best_score = score;
                tied.clear();
                tied.push(mv);
            } else if score == best_score {
                tied.push(mv);
            }
        }
        self.buffers[0] = moves;

        let chosen = match self.tie_break.as_mut() {
            Some(rng) => tied.choose(&mut **rng).copied(),
            None => tied.first().copied(),
        };
        let best_move = chosen.ok_or(SearchError::NoLegalMoves)?;

        debug!(
            depth,
            nodes = self.nodes,
            leaves = self.leaves,
            score = best_score,
            ties = tied.len(),
            best_move = ?best_move,
            "search finished"
        );

        Ok(SearchOutcome {
            best_move,
            score: best_score,
            nodes: self.nodes,
            leaves: self.leaves,
        })
    }

    /// Minimax value of `pos` searched `depth` plies deep inside the window
    /// `(alpha, beta)`, oriented to the current perspective.
    ///
    /// With `depth == 0` this is exactly the oriented static evaluation.
    pub fn alphabeta(
        &mut self,
        pos: &mut G,
        depth: u8,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Score {
        self.alphabeta_at(pos, depth, 0, alpha, beta, maximizing)
    }

    fn alphabeta_at(
        &mut self,
        pos: &mut G,
        depth: u8,
        ply: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.nodes += 1;

        if depth == 0 {
            self.leaves += 1;
            return relative_to(self.evaluator.evaluate(pos), self.perspective);
        }

        if self.config.terminal_scoring {
            if pos.is_checkmate() {
                return self.mate_score(pos, ply);
            }
            if pos.is_draw() {
                return self.config.draw_score;
            }
        }

        let mut moves = self.take_buffer(ply);
        pos.legal_moves_into(&mut moves);

        // With no moves and no terminal scoring the sentinel falls through.
        let mut value = if maximizing { -INFINITY } else { INFINITY };
        for &mv in &moves {
            pos.apply_move(mv);
            let score = self.alphabeta_at(pos, depth - 1, ply + 1, alpha, beta, !maximizing);
            pos.undo_move(mv);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
                if self.config.pruning && value >= beta {
                    break; // Beta cutoff
                }
            } else {
                value = value.min(score);
                beta = beta.min(value);
                if self.config.pruning && value <= alpha {
                    break; // Alpha cutoff
                }
            }
        }

        self.buffers[ply] = moves;
        value
    }

    /// The side to move is checkmated.
    fn mate_score(&self, pos: &G, ply: usize) -> Score {
        let distance = ply as Score;
        if pos.side_to_move() == self.perspective {
            -MATE_SCORE + distance
        } else {
            MATE_SCORE - distance
        }
    }

    fn take_buffer(&mut self, ply: usize) -> Vec<G::Move> {
        if self.buffers.len() <= ply {
            self.buffers.resize_with(ply + 1, Vec::new);
        }
        std::mem::take(&mut self.buffers[ply])
    }
}

/// Searches `pos` to `depth` plies with material evaluation and the default
/// configuration and returns the best move for the side to move.
pub fn find_best_move<G: GameState>(pos: &mut G, depth: u8) -> Result<G::Move, SearchError> {
    let config = SearchConfig::default();
    Searcher::new(&Material, &config)
        .search(pos, depth)
        .map(|outcome| outcome.best_move)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
