//! Helpers for constructing the oracle bundle the cooking skill reads from.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use cooking_content::{ContentFactory, TranslationTable};
use cooking_core::{ConfigOracle, CookingConfig, SkillEnv, SpriteOracle, SpriteSheet};

/// Size of the blank sheet used when no sprite source is supplied; large
/// enough for every icon region the skill cuts.
pub const PLACEHOLDER_SHEET_SIZE: (u32, u32) = (128, 288);

/// Live collaborators handed to skill construction and queries.
#[derive(Clone)]
pub struct OracleBundle {
    pub translations: Arc<TranslationTable>,
    pub config: Arc<CookingConfig>,
    pub sprites: Arc<dyn SpriteOracle>,
}

impl OracleBundle {
    pub fn new(
        translations: Arc<TranslationTable>,
        config: Arc<CookingConfig>,
        sprites: Arc<dyn SpriteOracle>,
    ) -> Self {
        Self {
            translations,
            config,
            sprites,
        }
    }

    /// Environment for the level-up text queries.
    pub fn env(&self) -> SkillEnv<'_> {
        SkillEnv::new(&*self.translations, &*self.config)
    }

    pub fn debug_mode(&self) -> bool {
        self.config.debug_mode()
    }
}

pub trait OracleFactory: Send + Sync {
    fn build(&self) -> anyhow::Result<OracleBundle>;
}

/// Oracle factory that loads configuration and translations from data files.
///
/// Sprites are not read from disk; supply a sheet with
/// [`ContentOracleFactory::with_sprites`] or a blank placeholder is used.
#[derive(Clone)]
pub struct ContentOracleFactory {
    data_dir: PathBuf,
    locale: Option<String>,
    debug_override: Option<bool>,
    sprites: Option<Arc<dyn SpriteOracle>>,
}

impl ContentOracleFactory {
    /// Create a new content oracle factory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            locale: None,
            debug_override: None,
            sprites: None,
        }
    }

    pub fn locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    pub fn debug_override(mut self, debug: Option<bool>) -> Self {
        self.debug_override = debug;
        self
    }

    pub fn with_sprites(mut self, sprites: Arc<dyn SpriteOracle>) -> Self {
        self.sprites = Some(sprites);
        self
    }
}

impl OracleFactory for ContentOracleFactory {
    fn build(&self) -> anyhow::Result<OracleBundle> {
        let factory = ContentFactory::new(&self.data_dir);

        let mut config = factory.load_config().with_context(|| {
            format!("Failed to load config.toml from {}", self.data_dir.display())
        })?;
        if let Some(debug) = self.debug_override {
            config.debug_mode = debug;
        }

        let translations = factory
            .load_translations(self.locale.as_deref())
            .with_context(|| {
                format!("Failed to load translations from {}", self.data_dir.display())
            })?;

        let sprites = self.sprites.clone().unwrap_or_else(|| {
            tracing::debug!("No sprite sheet supplied, using blank placeholder");
            let (width, height) = PLACEHOLDER_SHEET_SIZE;
            Arc::new(SpriteSheet::blank(width, height))
        });

        Ok(OracleBundle::new(
            Arc::new(translations),
            Arc::new(config),
            sprites,
        ))
    }
}
