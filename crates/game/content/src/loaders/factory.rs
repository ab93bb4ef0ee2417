//! Content factory for building matches from data files.

use std::path::{Path, PathBuf};

use fight_core::{Battlefield, CharacterSpec, FightConfig};

use crate::loaders::{CharacterLoader, ConfigLoader, LoadResult};
use crate::roster::Roster;

/// Content factory that loads all fighter content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── characters/
///     ├── brawler.ron
///     └── zoner.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load match configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<FightConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load one character from `characters/{name}.ron`.
    pub fn load_character(&self, name: &str) -> LoadResult<CharacterSpec> {
        let path = self.characters_dir().join(format!("{}.ron", name));
        CharacterLoader::load(&path)
    }

    /// Load every `*.ron` table under `characters/`, in file name order.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let dir = self.characters_dir();
        let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "ron"))
            .collect();
        paths.sort();

        let mut roster = Roster::new();
        for path in paths {
            let character = CharacterLoader::load(&path)?;
            roster
                .insert(character)
                .map_err(|e| anyhow::anyhow!("Failed to register {}: {}", path.display(), e))?;
        }
        tracing::info!(characters = roster.len(), dir = %dir.display(), "roster loaded");
        Ok(roster)
    }

    /// Load config and both characters, then set up a match.
    pub fn build_battlefield(&self, one: &str, two: &str) -> LoadResult<Battlefield> {
        let config = self.load_config()?;
        let roster = self.load_roster()?;
        let characters = roster
            .pair(one, two)
            .ok_or_else(|| anyhow::anyhow!("Unknown character in pairing {} vs {}", one, two))?;
        Battlefield::new(config, characters)
            .map_err(|e| anyhow::anyhow!("Failed to set up match: {}", e))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn characters_dir(&self) -> PathBuf {
        self.data_dir.join("characters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.characters_dir(), Path::new("/tmp/data/characters"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_config().is_err());
        assert!(factory.load_roster().is_err());
    }
}
