//! The cooking skill aggregate and its presentation queries.

use crate::config::CookingConfig;
use crate::env::{
    ConfigOracle, Icon, Region, Rgba, SkillEnv, SpriteOracle, Tokens, Translation,
    TranslationOracle,
};
use crate::error::SkillError;
use crate::skill::binder::{RawConfigTable, bind};
use crate::skill::professions::{ProfessionCatalogue, ProfessionTemplate};
use crate::skill::recipes::{LevelRecipeTable, RawLevelRecipeTable};
use crate::skill::values::{CookingSkillValues, experience_bar_color};

/// Highest reachable cooking level.
pub const MAX_SKILL_LEVEL: usize = 10;

/// Raw data tables a skill definition is assembled from.
#[derive(Clone, Copy, Debug)]
pub struct SkillSources<'a> {
    /// Scalar balance values (see [`CookingSkillValues`]) plus `ExperienceBarColor`.
    pub values: &'a RawConfigTable,
    pub level_recipes: &'a RawLevelRecipeTable,
    pub starting_recipes: &'a [String],
}

/// Fully assembled cooking skill.
///
/// Built once by [`SkillDefinition::build`] and immutable afterwards; queries
/// only read from it.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillDefinition {
    internal_name: String,
    values: CookingSkillValues,
    experience_curve: [u32; MAX_SKILL_LEVEL],
    experience_bar_color: Rgba,
    skills_page_icon: Icon,
    level_up_icon: Icon,
    starting_recipes: Vec<String>,
    level_recipes: LevelRecipeTable,
    professions: ProfessionCatalogue,
}

impl SkillDefinition {
    pub const MAX_LEVEL: u32 = MAX_SKILL_LEVEL as u32;

    /// Experience needed for each level; same thresholds as the vanilla skills.
    pub const EXPERIENCE_CURVE: [u32; MAX_SKILL_LEVEL] =
        [100, 380, 770, 1300, 2150, 3300, 4800, 6900, 10000, 15000];

    /// Cookpot on the skills page.
    pub const SKILLS_PAGE_ICON_REGION: Region = Region::square(31, 4, 10);

    /// Pot on a table in the level-up menu.
    pub const LEVEL_UP_ICON_REGION: Region = Region::square(0, 272, 16);

    pub const NAME_KEY: &'static str = "menu.cooking_recipe.buff.12";
    pub const BURN_LINE_KEY: &'static str = "menu.cooking_skill.levelup_burn";
    pub const LEVEL_UP_BONUS_KEY_PREFIX: &'static str = "menu.cooking_skill.levelupbonus.";

    /// Assembles the skill from its data tables.
    ///
    /// The text variant of the healing profession is chosen from
    /// `config.food_healing_takes_time()` as it reads now.
    ///
    /// # Errors
    ///
    /// Any [`SkillError`] from binding, table parsing, catalogue pairing or icon
    /// extraction. Nothing is returned on failure.
    pub fn build(
        sources: SkillSources<'_>,
        sprites: &dyn SpriteOracle,
        config: &dyn ConfigOracle,
    ) -> Result<Self, SkillError> {
        let mut values = CookingSkillValues::default();
        bind(&mut values, sources.values)?;

        let level_recipes = LevelRecipeTable::build(sources.level_recipes)?;
        let experience_bar_color = experience_bar_color(sources.values)?;

        let skills_page_icon = sprites.extract_region(Self::SKILLS_PAGE_ICON_REGION)?;
        let level_up_icon = sprites.extract_region(Self::LEVEL_UP_ICON_REGION)?;

        let template = ProfessionTemplate::from_values(&values, config.food_healing_takes_time());
        let professions = ProfessionCatalogue::build(sprites, &template)?;

        Ok(Self {
            internal_name: Self::internal_name(),
            values,
            experience_curve: Self::EXPERIENCE_CURVE,
            experience_bar_color,
            skills_page_icon,
            level_up_icon,
            starting_recipes: sources.starting_recipes.to_vec(),
            level_recipes,
            professions,
        })
    }

    /// Registration id of the skill.
    pub fn internal_name() -> String {
        format!("{}CookingSkill", CookingConfig::ASSET_PREFIX)
    }

    pub fn id(&self) -> &str {
        &self.internal_name
    }

    pub fn values(&self) -> &CookingSkillValues {
        &self.values
    }

    pub fn experience_curve(&self) -> &[u32] {
        &self.experience_curve
    }

    pub fn experience_bar_color(&self) -> Rgba {
        self.experience_bar_color
    }

    pub fn skills_page_icon(&self) -> &Icon {
        &self.skills_page_icon
    }

    pub fn level_up_icon(&self) -> &Icon {
        &self.level_up_icon
    }

    pub fn starting_recipes(&self) -> &[String] {
        &self.starting_recipes
    }

    pub fn level_recipes(&self) -> &LevelRecipeTable {
        &self.level_recipes
    }

    pub fn professions(&self) -> &ProfessionCatalogue {
        &self.professions
    }

    /// Display name of the skill.
    pub fn name(&self, translations: &dyn TranslationOracle) -> Translation {
        translations.get(Self::NAME_KEY)
    }

    /// Total experience required to reach `level` (1..=10).
    pub fn experience_for_level(&self, level: u32) -> Option<u32> {
        let index = level.checked_sub(1)? as usize;
        self.experience_curve.get(index).copied()
    }

    /// Level reached with `experience` points, capped at [`Self::MAX_LEVEL`].
    pub fn level_for_experience(&self, experience: u32) -> u32 {
        self.experience_curve
            .iter()
            .take_while(|&&threshold| experience >= threshold)
            .count() as u32
    }

    /// Extra lines shown in the level-up menu for `level`.
    ///
    /// The burn-chance line comes first when burning is enabled. The level's
    /// bonus line follows when it exists, except that the nettle tea bonus is
    /// hidden while nettles are unavailable.
    pub fn extra_level_up_info(&self, level: u32, env: &SkillEnv<'_>) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);

        if let Some(burn) = self.burn_line(level, env) {
            lines.push(burn);
        }

        let bonus = env
            .translations()
            .get(&format!("{}{}", Self::LEVEL_UP_BONUS_KEY_PREFIX, level));
        let nettle_level = i64::from(level) == i64::from(self.values.craft_nettle_tea_level);
        if bonus.has_value() && (!nettle_level || env.config().nettles_active()) {
            lines.push(bonus.into());
        }

        lines
    }

    /// Hover text for the skill on the skills page.
    ///
    /// Empty unless burning is enabled, in which case it is the burn-chance
    /// line on its own row.
    pub fn skill_page_hover_text(&self, level: u32, env: &SkillEnv<'_>) -> String {
        match self.burn_line(level, env) {
            Some(burn) => format!("\n{burn}"),
            None => String::new(),
        }
    }

    fn burn_line(&self, level: u32, env: &SkillEnv<'_>) -> Option<String> {
        if !env.config().food_can_burn() {
            return None;
        }
        let tokens = Tokens::from([(
            "Number".to_string(),
            self.values.burn_chance_text(level),
        )]);
        Some(
            env.translations()
                .lookup(Self::BURN_LINE_KEY, &tokens)
                .into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::env::SpriteSheet;
    use crate::skill::binder::ScalarKind;

    /// Echoes keys and tokens so assertions can see exactly what was asked.
    struct EchoTranslations {
        known: HashMap<String, String>,
    }

    impl EchoTranslations {
        fn new(known: &[(&str, &str)]) -> Self {
            Self {
                known: known
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl TranslationOracle for EchoTranslations {
        fn lookup(&self, key: &str, tokens: &Tokens) -> Translation {
            if let Some(text) = self.known.get(key) {
                return Translation::new(key, text.clone());
            }
            if key == SkillDefinition::BURN_LINE_KEY {
                return Translation::new(key, format!("burn {}", tokens["Number"]));
            }
            Translation::missing(key)
        }
    }

    fn values_table() -> RawConfigTable {
        [
            ("MaxFoodStackPerDayForExperienceGains", "20"),
            ("CraftNettleTeaLevel", "3"),
            ("GiftBoostValue", "10"),
            ("SalePriceModifier", "1.15"),
            ("ExtraPortionChance", "0.1"),
            ("RestorationValue", "35"),
            ("RestorationAltValue", "5"),
            ("BuffRateValue", "3"),
            ("BuffDurationValue", "36"),
            ("BurnChanceReduction", "0.5"),
            ("BurnChanceModifier", "1.5"),
            ("ExperienceBarColor", "146 111 91"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn recipe_table() -> RawLevelRecipeTable {
        HashMap::from([
            ("1".to_string(), vec!["Salad".to_string()]),
            ("3".to_string(), vec!["Nettle Tea".to_string()]),
        ])
    }

    fn build_with(
        values: &RawConfigTable,
        config: &CookingConfig,
    ) -> Result<SkillDefinition, SkillError> {
        let starting = vec!["Fried Egg".to_string()];
        SkillDefinition::build(
            SkillSources {
                values,
                level_recipes: &recipe_table(),
                starting_recipes: &starting,
            },
            &SpriteSheet::blank(128, 288),
            config,
        )
    }

    fn skill() -> SkillDefinition {
        build_with(&values_table(), &CookingConfig::default()).unwrap()
    }

    #[test]
    fn build_assembles_every_part() {
        let skill = skill();
        assert_eq!(skill.id(), "blueberry.LoveOfCooking.CookingSkill");
        assert_eq!(skill.experience_bar_color(), Rgba::opaque(146, 111, 91));
        assert_eq!(skill.experience_curve().len(), 10);
        assert_eq!(skill.skills_page_icon().width(), 10);
        assert_eq!(skill.level_up_icon().width(), 16);
        assert_eq!(skill.starting_recipes(), ["Fried Egg"]);
        assert_eq!(skill.level_recipes().recipes_at(3), ["Nettle Tea"]);
        assert_eq!(skill.professions().pairs().count(), 3);
        assert_eq!(skill.values().craft_nettle_tea_level, 3);
    }

    #[test]
    fn build_fails_as_a_whole_on_bad_data() {
        let mut values = values_table();
        values.remove("BurnChanceModifier");
        assert_eq!(
            build_with(&values, &CookingConfig::default()).unwrap_err(),
            SkillError::MissingKey {
                key: "BurnChanceModifier".into()
            }
        );

        let mut values = values_table();
        values.insert("GiftBoostValue".into(), "ten".into());
        assert!(matches!(
            build_with(&values, &CookingConfig::default()),
            Err(SkillError::TypeCoercion {
                kind: ScalarKind::Integer,
                ..
            })
        ));
    }

    #[test]
    fn healing_flag_is_read_at_build_time() {
        let instant = build_with(
            &values_table(),
            &CookingConfig::default().with_food_healing_takes_time(false),
        )
        .unwrap();
        assert_eq!(
            instant.professions().professions()[1].name_key,
            "menu.cooking_skill.tier1_path2_alt.name"
        );
        assert_eq!(
            skill().professions().professions()[1].name_key,
            "menu.cooking_skill.tier1_path2.name"
        );
    }

    #[test]
    fn experience_levels() {
        let skill = skill();
        assert_eq!(skill.experience_for_level(0), None);
        assert_eq!(skill.experience_for_level(1), Some(100));
        assert_eq!(skill.experience_for_level(10), Some(15000));
        assert_eq!(skill.experience_for_level(11), None);
        assert_eq!(skill.level_for_experience(99), 0);
        assert_eq!(skill.level_for_experience(380), 2);
        assert_eq!(skill.level_for_experience(1_000_000), 10);
    }

    #[test]
    fn no_burn_line_when_burning_disabled() {
        let skill = skill();
        let translations = EchoTranslations::new(&[]);
        let config = CookingConfig::default().with_food_can_burn(false);
        let env = SkillEnv::new(&translations, &config);

        assert_eq!(skill.skill_page_hover_text(4, &env), "");
        assert!(skill.extra_level_up_info(4, &env).is_empty());
    }

    #[test]
    fn burn_line_uses_two_decimals() {
        let skill = skill();
        let translations = EchoTranslations::new(&[]);
        let config = CookingConfig::default();
        let env = SkillEnv::new(&translations, &config);

        // 4 × 1.5 × 0.5
        assert_eq!(skill.skill_page_hover_text(4, &env), "\nburn 3.00");
        assert_eq!(skill.extra_level_up_info(4, &env), vec!["burn 3.00"]);
    }

    #[test]
    fn bonus_line_follows_burn_line() {
        let skill = skill();
        let translations =
            EchoTranslations::new(&[("menu.cooking_skill.levelupbonus.2", "Bigger portions")]);
        let config = CookingConfig::default();
        let env = SkillEnv::new(&translations, &config);

        assert_eq!(
            skill.extra_level_up_info(2, &env),
            vec!["burn 1.50", "Bigger portions"]
        );
        assert_eq!(skill.skill_page_hover_text(2, &env), "\nburn 1.50");
    }

    #[test]
    fn nettle_tea_bonus_requires_nettles() {
        let skill = skill();
        let translations =
            EchoTranslations::new(&[("menu.cooking_skill.levelupbonus.3", "Nettle tea")]);

        let without = CookingConfig::default()
            .with_food_can_burn(false)
            .with_new_crops(false);
        let env = SkillEnv::new(&translations, &without);
        assert!(skill.extra_level_up_info(3, &env).is_empty());

        let with = CookingConfig::default().with_food_can_burn(false);
        let env = SkillEnv::new(&translations, &with);
        assert_eq!(skill.extra_level_up_info(3, &env), vec!["Nettle tea"]);
    }

    #[test]
    fn skill_name_comes_from_translations() {
        let translations = EchoTranslations::new(&[(SkillDefinition::NAME_KEY, "Cooking")]);
        assert_eq!(skill().name(&translations).to_string(), "Cooking");
    }
}
