//! Traits describing the collaborators the skill reads from.
//!
//! Oracles expose live configuration, translated strings, and sprite pixels.
//! The [`SkillEnv`] aggregate bundles the ones the presentation queries need so
//! the skill definition never couples to a concrete host implementation.
mod config;
mod sprites;
mod translation;

pub use config::ConfigOracle;
pub use sprites::{Icon, Region, Rgba, SpriteOracle, SpriteSheet};
pub use translation::{Tokens, Translation, TranslationOracle};

/// Read-only oracles consulted by skill queries.
#[derive(Clone, Copy)]
pub struct SkillEnv<'a> {
    translations: &'a dyn TranslationOracle,
    config: &'a dyn ConfigOracle,
}

impl<'a> SkillEnv<'a> {
    pub fn new(translations: &'a dyn TranslationOracle, config: &'a dyn ConfigOracle) -> Self {
        Self {
            translations,
            config,
        }
    }

    pub fn translations(&self) -> &'a dyn TranslationOracle {
        self.translations
    }

    pub fn config(&self) -> &'a dyn ConfigOracle {
        self.config
    }
}

impl core::fmt::Debug for SkillEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SkillEnv")
            .field("food_can_burn", &self.config.food_can_burn())
            .field(
                "food_healing_takes_time",
                &self.config.food_healing_takes_time(),
            )
            .field("nettles_active", &self.config.nettles_active())
            .finish_non_exhaustive()
    }
}
