//! Registers the cooking skill: loads its tables, assembles the definition,
//! and bundles it with the oracles front-ends query it through.
use std::sync::Arc;

use anyhow::Result;
use cooking_content::ContentFactory;
use cooking_core::skill::missing_keys;
use cooking_core::{
    CookingSkillValues, RawConfigTable, RawLevelRecipeTable, SkillDataError, SkillDefinition,
    SkillError, SkillSources,
};

use crate::config::BootstrapConfig;
use crate::oracles::{ContentOracleFactory, OracleBundle, OracleFactory};

/// Builder that assembles the skill definition and its oracles.
pub struct SkillBuilder {
    config: BootstrapConfig,
    oracle_factory: Arc<dyn OracleFactory>,
}

impl SkillBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        let default_factory = ContentOracleFactory::new(config.resolve_data_dir())
            .locale(config.locale.clone())
            .debug_override(config.debug_mode);
        Self {
            config,
            oracle_factory: Arc::new(default_factory),
        }
    }

    /// Provide a custom oracle factory (e.g., one carrying a real sprite sheet).
    pub fn oracle_factory(mut self, factory: impl OracleFactory + 'static) -> Self {
        self.oracle_factory = Arc::new(factory);
        self
    }

    /// Loads every table and builds the skill in one step.
    ///
    /// Nothing is registered on failure; the error carries the data directory
    /// and, for data errors, the skill error code.
    pub fn build(self) -> Result<SkillSetup> {
        let oracles = self.oracle_factory.build()?;
        let data_dir = self.config.resolve_data_dir();
        let internal_name = SkillDefinition::internal_name();

        if oracles.debug_mode() {
            tracing::debug!("Registering skill {}", internal_name);
        }

        let context = || {
            format!(
                "Failed to register skill {} from {}",
                internal_name,
                data_dir.display()
            )
        };

        let (values, level_recipes, starting_recipes) =
            load_tables(&ContentFactory::new(&data_dir)).map_err(|e| {
                tracing::error!("Failed to register skill {}: {:#}", internal_name, e);
                e.context(context())
            })?;

        let sources = SkillSources {
            values: &values,
            level_recipes: &level_recipes,
            starting_recipes: &starting_recipes,
        };

        let skill = SkillDefinition::build(sources, &*oracles.sprites, &*oracles.config)
            .map_err(|e| {
                tracing::error!(
                    code = e.error_code(),
                    severity = %e.severity(),
                    "Failed to register skill {}: {}",
                    internal_name,
                    e
                );

                let missing = match &e {
                    SkillError::MissingKey { .. } => missing_keys::<CookingSkillValues>(&values),
                    _ => Vec::new(),
                };
                if missing.is_empty() {
                    anyhow::Error::new(e).context(context())
                } else {
                    tracing::error!(?missing, "Skill values table is incomplete");
                    let message = format!("{} (missing keys: {})", context(), missing.join(", "));
                    anyhow::Error::new(e).context(message)
                }
            })?;

        tracing::info!(
            skill = skill.id(),
            recipe_levels = skill.level_recipes().len(),
            starting_recipes = skill.starting_recipes().len(),
            "Registered skill"
        );

        Ok(SkillSetup {
            config: self.config,
            oracles,
            skill,
        })
    }
}

fn load_tables(
    content: &ContentFactory,
) -> Result<(RawConfigTable, RawLevelRecipeTable, Vec<String>)> {
    Ok((
        content.load_skill_values()?,
        content.load_level_recipes()?,
        content.load_starting_recipes()?,
    ))
}

pub struct SkillSetup {
    pub config: BootstrapConfig,
    pub oracles: OracleBundle,
    pub skill: SkillDefinition,
}
