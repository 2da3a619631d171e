//! Minimax Chess Engine
//!
//! Fixed-depth alpha-beta minimax with material-only evaluation.
//! The rules of the game come from `chess_core`; this crate only decides
//! which of the legal moves to play.

pub mod config;
pub mod eval;
pub mod search;

use chess_core::{Engine, Position, SearchError, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use config::{ConfigError, SearchConfig, TieBreak, DEFAULT_DEPTH};
pub use eval::{evaluate, piece_value, relative_to, Evaluator, Material, Score};
pub use search::{find_best_move, SearchOutcome, Searcher, INFINITY, MATE_SCORE};

/// Chess engine using alpha-beta minimax over material.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning, no move ordering
/// - Material evaluation (pawn 100 ... queen 900)
/// - Optional checkmate/draw scoring at interior nodes
/// - Optional seeded tie-breaking between equal root moves
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    config: SearchConfig,
    rng: Option<StdRng>,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        let rng = seeded_rng(config.tie_break);
        Self { config, rng }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

fn seeded_rng(tie_break: TieBreak) -> Option<StdRng> {
    match tie_break {
        TieBreak::First => None,
        TieBreak::Seeded { seed } => Some(StdRng::seed_from_u64(seed)),
    }
}

/// UCI `check` option value, case-insensitive.
fn parse_check(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &mut Position, depth: u8) -> Result<SearchResult, SearchError> {
        let mut searcher = Searcher::new(&Material, &self.config);
        if let Some(rng) = self.rng.as_mut() {
            searcher = searcher.with_tie_breaker(rng);
        }
        let outcome = searcher.search(pos, depth)?;

        Ok(SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth,
            nodes: outcome.nodes,
            leaves: outcome.leaves,
        })
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.rng = seeded_rng(self.config.tie_break);
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name.to_ascii_lowercase().as_str() {
            "depth" => match value.parse::<u8>() {
                Ok(depth) if depth > 0 => {
                    self.config.depth = depth;
                    true
                }
                _ => false,
            },
            "terminalscoring" => match parse_check(value) {
                Some(on) => {
                    self.config.terminal_scoring = on;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}
