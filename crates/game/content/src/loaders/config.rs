//! Mod configuration loader.

use std::path::Path;

use cooking_core::CookingConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for mod configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys left out of the file keep their [`CookingConfig::default`] values.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing CookingConfig
    pub fn load(path: &Path) -> LoadResult<CookingConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<CookingConfig> {
        let config: CookingConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
