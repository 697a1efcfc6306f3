//! Data-driven cooking content and loaders.
//!
//! This crate reads the cooking skill's data files and hands raw tables to
//! `cooking-core`:
//! - Skill balance values (data-driven via RON)
//! - Level → recipe unlocks (data-driven via RON)
//! - Starting recipes from the item definitions (data-driven via RON)
//! - Translations (data-driven via RON, one file per locale)
//! - Mod configuration (data-driven via TOML)
//!
//! The bundled data files live in `data/` next to this crate.

pub mod translations;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use translations::TranslationTable;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ItemDefinitionsLoader, LevelRecipesLoader, LoadResult,
    SkillValuesLoader, TranslationLoader,
};
