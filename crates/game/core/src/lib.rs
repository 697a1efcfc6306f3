//! Data-driven cooking skill definition shared by loaders and front-ends.
//!
//! `cooking-core` owns the skill's rules: binding balance values from raw
//! tables, deriving recipe unlocks and profession pairs, and answering the
//! level-up text queries. It performs no I/O; data arrives as already-read
//! tables and host services are reached through the oracle traits in [`env`].
pub mod config;
pub mod env;
pub mod error;
pub mod skill;

pub use config::CookingConfig;
pub use env::{
    ConfigOracle, Icon, Region, Rgba, SkillEnv, SpriteOracle, SpriteSheet, Tokens, Translation,
    TranslationOracle,
};
pub use error::{ErrorSeverity, SkillDataError, SkillError};
pub use skill::{
    CookingSkillValues, LevelRecipeTable, ProfessionCatalogue, ProfessionDefinition,
    ProfessionPair, ProfessionSlot, RawConfigTable, RawLevelRecipeTable, RecipeLevelEntry,
    ScalarFields, ScalarKind, SkillDefinition, SkillSources,
};
