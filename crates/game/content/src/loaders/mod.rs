//! Content loaders for reading cooking data from files.
//!
//! Each loader turns one RON/TOML file into the raw tables or configuration
//! consumed by `cooking-core`.

pub mod config;
pub mod factory;
pub mod tables;
pub mod translations;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use tables::{ItemDefinitionsLoader, LevelRecipesLoader, SkillValuesLoader};
pub use translations::TranslationLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    tracing::debug!(path = %path.display(), "Reading content file");
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
