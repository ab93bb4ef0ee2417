//! Character table loader.

use std::path::Path;

use fight_core::CharacterSpec;

use crate::loaders::{LoadResult, read_file};

/// Loader for character tables from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load and validate a [`CharacterSpec`] from a RON file.
    ///
    /// A table without a `name` is named after the file stem.
    pub fn load(path: &Path) -> LoadResult<CharacterSpec> {
        let content = read_file(path)?;
        let mut character = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
        if character.name == CharacterSpec::default().name {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                character.name = stem.to_string();
            }
        }
        tracing::debug!(name = %character.name, path = %path.display(), "loaded character");
        Ok(character)
    }

    /// Parse a character table from RON text.
    pub fn parse(content: &str) -> LoadResult<CharacterSpec> {
        let character: CharacterSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character RON: {}", e))?;
        character
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid character '{}': {}", character.name, e))?;
        Ok(character)
    }
}
