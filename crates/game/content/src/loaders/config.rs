//! Match configuration loader.

use std::path::Path;

use fight_core::FightConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for match configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a [`FightConfig`] from a TOML file.
    ///
    /// Missing keys take their defaults, so an empty file is a valid
    /// default configuration.
    pub fn load(path: &Path) -> LoadResult<FightConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<FightConfig> {
        let config: FightConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
        Ok(config)
    }
}
