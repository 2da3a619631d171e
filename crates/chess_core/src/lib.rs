pub mod error;
pub mod position;
pub mod rules;
pub mod types;
pub mod uci;

// Re-export the rules layer (not engine-specific)
pub use cozy_chess::Move;
pub use error::*;
pub use position::*;
pub use rules::GameState;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait, implemented by move-choosing engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found
    pub best_move: Move,
    /// Evaluation score in centipawns from the searching side's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
    /// Number of leaf evaluations
    pub leaves: u64,
}

/// Trait for anything that picks a move for a driver.
///
/// The driver owns the game position and hands it over for the duration of
/// one decision; the engine must give it back unchanged.
pub trait Engine {
    /// Search the position to `depth` plies and return the chosen move.
    ///
    /// Fails if `depth` is zero or the position has no legal moves. Callers
    /// are expected to check for a legal move first.
    fn search(&mut self, pos: &mut Position, depth: u8) -> Result<SearchResult, SearchError>;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "minimax-bot"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
