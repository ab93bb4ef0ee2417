//! Named registry of validated characters.

use std::collections::BTreeMap;
use std::sync::Arc;

use fight_core::{CharacterError, CharacterSpec, presets};

/// Characters available for selection, keyed by name.
///
/// Every entry has passed [`CharacterSpec::validate`], so any pair drawn from
/// a roster can start a match.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    characters: BTreeMap<String, Arc<CharacterSpec>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// A roster holding the built-in sample characters.
    pub fn with_presets() -> Result<Self, CharacterError> {
        let mut roster = Self::new();
        roster.insert(presets::sparring_partner()?)?;
        Ok(roster)
    }

    /// Validates and registers `character` under its own name, replacing any
    /// previous entry with that name.
    pub fn insert(&mut self, character: CharacterSpec) -> Result<Arc<CharacterSpec>, CharacterError> {
        character.validate()?;
        let character = Arc::new(character);
        if self
            .characters
            .insert(character.name.clone(), character.clone())
            .is_some()
        {
            tracing::warn!(name = %character.name, "replaced roster entry");
        } else {
            tracing::debug!(name = %character.name, "registered character");
        }
        Ok(character)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<CharacterSpec>> {
        self.characters.get(name)
    }

    /// Looks up both sides of a match.
    pub fn pair(&self, one: &str, two: &str) -> Option<[Arc<CharacterSpec>; 2]> {
        Some([self.get(one)?.clone(), self.get(two)?.clone()])
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.characters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_registered() {
        let roster = Roster::with_presets().unwrap();
        assert_eq!(roster.len(), 1);
        let names: Vec<_> = roster.names().collect();
        assert_eq!(names, vec!["sparring partner"]);
        assert!(roster.pair("sparring partner", "sparring partner").is_some());
        assert!(roster.pair("sparring partner", "nobody").is_none());
    }

    #[test]
    fn invalid_character_is_rejected() {
        let mut roster = Roster::new();
        let err = roster.insert(CharacterSpec::new("empty")).unwrap_err();
        assert!(matches!(err, CharacterError::MissingAnimation(_)));
        assert!(roster.is_empty());
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut roster = Roster::with_presets().unwrap();
        let mut faster = presets::sparring_partner().unwrap();
        faster.move_speed = 300.0;
        roster.insert(faster).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("sparring partner").unwrap().move_speed, 300.0);
    }
}
