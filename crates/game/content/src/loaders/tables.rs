//! Skill data table loaders.
//!
//! All three tables are plain RON maps so they stay editable by hand:
//!
//! ```ron
//! // skill_values.ron
//! { "CraftNettleTeaLevel": "3", "ExperienceBarColor": "146 111 91" }
//!
//! // skill_level_recipes.ron
//! { "1": ["Salad", "Fried Egg"], "3": ["Nettle Tea"] }
//!
//! // item_definitions.ron
//! { "StartingRecipes": ["Fried Egg"] }
//! ```

use std::collections::HashMap;
use std::path::Path;

use cooking_core::{RawConfigTable, RawLevelRecipeTable};

use crate::loaders::{LoadResult, read_file};

/// Key of the starting recipes list in the item definitions table.
pub const STARTING_RECIPES_KEY: &str = "StartingRecipes";

/// Loader for the scalar skill values table.
pub struct SkillValuesLoader;

impl SkillValuesLoader {
    /// Load the name → raw value table.
    pub fn load(path: &Path) -> LoadResult<RawConfigTable> {
        let content = read_file(path)?;
        let table: RawConfigTable = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse skill values RON at {:?}: {}", path, e)
        })?;

        tracing::debug!(entries = table.len(), "Loaded skill values");
        Ok(table)
    }
}

/// Loader for the level → recipes table.
pub struct LevelRecipesLoader;

impl LevelRecipesLoader {
    /// Load the level label → recipe ids table.
    ///
    /// Level labels are kept as strings here; parsing them is the recipe
    /// table's job so malformed labels surface as skill errors.
    pub fn load(path: &Path) -> LoadResult<RawLevelRecipeTable> {
        let content = read_file(path)?;
        let table: RawLevelRecipeTable = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse level recipes RON at {:?}: {}", path, e)
        })?;

        tracing::debug!(levels = table.len(), "Loaded level recipes");
        Ok(table)
    }
}

/// Loader for the general item definitions table.
pub struct ItemDefinitionsLoader;

impl ItemDefinitionsLoader {
    /// Load every named list from the item definitions table.
    pub fn load(path: &Path) -> LoadResult<HashMap<String, Vec<String>>> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse item definitions RON at {:?}: {}", path, e)
        })
    }

    /// Load the `StartingRecipes` list, in file order.
    pub fn load_starting_recipes(path: &Path) -> LoadResult<Vec<String>> {
        let mut definitions = Self::load(path)?;
        definitions.remove(STARTING_RECIPES_KEY).ok_or_else(|| {
            anyhow::anyhow!(
                "Item definitions at {:?} have no '{}' entry",
                path,
                STARTING_RECIPES_KEY
            )
        })
    }
}
