//! Content factory for loading every skill data file from one directory.

use std::path::{Path, PathBuf};

use cooking_core::{CookingConfig, RawConfigTable, RawLevelRecipeTable};

use crate::loaders::{
    ConfigLoader, ItemDefinitionsLoader, LevelRecipesLoader, LoadResult, SkillValuesLoader,
    TranslationLoader,
};
use crate::translations::TranslationTable;

/// Content factory that loads all cooking content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skill_values.ron
/// ├── skill_level_recipes.ron
/// ├── item_definitions.ron
/// └── i18n/
///     └── default.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load mod configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CookingConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load scalar skill values from `skill_values.ron`.
    pub fn load_skill_values(&self) -> LoadResult<RawConfigTable> {
        let path = self.data_dir.join("skill_values.ron");
        SkillValuesLoader::load(&path)
    }

    /// Load level → recipe unlocks from `skill_level_recipes.ron`.
    pub fn load_level_recipes(&self) -> LoadResult<RawLevelRecipeTable> {
        let path = self.data_dir.join("skill_level_recipes.ron");
        LevelRecipesLoader::load(&path)
    }

    /// Load the starting recipes list from `item_definitions.ron`.
    pub fn load_starting_recipes(&self) -> LoadResult<Vec<String>> {
        let path = self.data_dir.join("item_definitions.ron");
        ItemDefinitionsLoader::load_starting_recipes(&path)
    }

    /// Load translations from `i18n/`, overlaid with `locale` if given.
    pub fn load_translations(&self, locale: Option<&str>) -> LoadResult<TranslationTable> {
        TranslationLoader::load_locale(&self.data_dir.join("i18n"), locale)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
