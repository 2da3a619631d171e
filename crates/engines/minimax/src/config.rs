//! Search configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::Score;

/// Depth the bot searches when nothing else is configured.
pub const DEFAULT_DEPTH: u8 = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse search config")]
    Parse(#[from] toml::de::Error),

    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// How the root picks between moves that score exactly the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the first move in generation order.
    #[default]
    First,
    /// Pick uniformly among the tied moves with a seeded generator.
    Seeded { seed: u64 },
}

/// Tunable behaviour of the alpha-beta search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Default depth in plies used by drivers that don't ask for one.
    pub depth: u8,
    /// Score checkmates and draws as terminal nodes instead of expanding them.
    pub terminal_scoring: bool,
    /// Value of a drawn terminal from the searching side's point of view.
    /// Drawn nodes score this fixed value rather than the worst score for the
    /// side to move, so a losing side can still steer towards a draw.
    pub draw_score: Score,
    /// Alpha-beta cutoffs. With `false` the search is plain minimax.
    pub pruning: bool,
    pub tie_break: TieBreak,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            terminal_scoring: true,
            draw_score: 0,
            pruning: true,
            tie_break: TieBreak::First,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
