//! Bot configuration loader.

use std::path::Path;

use maze_core::BotConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for bot configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`BotConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<BotConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BotConfig> {
        let config: BotConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
