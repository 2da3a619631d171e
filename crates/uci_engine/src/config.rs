//! Bot configuration file.

use std::path::Path;

use anyhow::Context;
use minimax_engine::SearchConfig;
use serde::Deserialize;

/// Top-level TOML document read by `--config`.
///
/// ```toml
/// log_filter = "minimax_engine=debug"
///
/// [search]
/// depth = 5
/// tie_break = { kind = "seeded", seed = 7 }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    /// Used when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
    pub search: SearchConfig,
}

impl BotConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: BotConfig = toml::from_str(text).context("failed to parse bot config")?;
        config.search.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
