use thiserror::Error;

/// Errors raised while building a position or reading moves from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("`{0}` is not a move in UCI notation")]
    MalformedMove(String),

    #[error("move `{0}` is not legal in the current position")]
    IllegalMove(String),

    #[error("unsupported position command: {0}")]
    UnsupportedCommand(String),
}

/// Precondition failures of a search call.
///
/// These are contract violations by the caller: there is no sensible move to
/// return, so the search reports them instead of handing back a placeholder.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("the position has no legal moves")]
    NoLegalMoves,
}
