//! Data-driven fighter content and loaders.
//!
//! This crate houses the character roster and provides loaders for RON/TOML
//! data files:
//! - Character tables (data-driven via RON)
//! - Match configuration (data-driven via TOML)
//!
//! Content is handed to the simulation as `Arc<CharacterSpec>` and never
//! changes once a match starts.

pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::Roster;

#[cfg(feature = "loaders")]
pub use loaders::{CharacterLoader, ConfigLoader, ContentFactory, LoadResult};
