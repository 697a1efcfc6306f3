//! Cooking skill definition: data binding, recipe unlocks, professions and the
//! assembled [`SkillDefinition`].
//!
//! Construction flows leaves first: [`binder`] fills the scalar values,
//! [`recipes`] and [`professions`] build their catalogues from separate tables,
//! and [`definition`] ties them together in one eager step.
pub mod binder;
pub mod definition;
pub mod professions;
pub mod recipes;
pub mod values;

pub use binder::{
    FieldSlot, FieldSpec, RawConfigTable, ScalarFields, ScalarKind, bind, missing_keys,
};
pub use definition::{MAX_SKILL_LEVEL, SkillDefinition, SkillSources};
pub use professions::{
    Choice, FIRST_PAIR_UNLOCK_LEVEL, LATER_PAIR_UNLOCK_LEVEL, PROFESSION_COUNT,
    ProfessionCatalogue, ProfessionDefinition, ProfessionPair, ProfessionSlot, ProfessionTemplate,
};
pub use recipes::{LevelRecipeTable, RawLevelRecipeTable, RecipeLevelEntry};
pub use values::{CookingSkillValues, EXPERIENCE_BAR_COLOR_KEY, experience_bar_color};
