//! Plain-text rendering of a registered skill.
use std::fmt::Write;
use std::ops::RangeInclusive;

use cooking_core::{SkillDefinition, SkillEnv};

/// Renders the skill summary followed by one block per level in `levels`.
pub fn render(skill: &SkillDefinition, env: &SkillEnv<'_>, levels: RangeInclusive<u32>) -> String {
    let translations = env.translations();
    let mut out = String::new();

    let color = skill.experience_bar_color();
    let _ = writeln!(
        out,
        "{} [{}] bar color {} {} {}",
        skill.name(translations),
        skill.id(),
        color.r,
        color.g,
        color.b
    );
    let _ = writeln!(out, "Starting recipes: {}", skill.starting_recipes().join(", "));

    for level in levels {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Level {} ({} xp)",
            level,
            skill.experience_for_level(level).unwrap_or_default()
        );

        let recipes = skill.level_recipes().recipes_at(level);
        if !recipes.is_empty() {
            let _ = writeln!(out, "  Recipes: {}", recipes.join(", "));
        }

        for line in skill.extra_level_up_info(level, env) {
            let _ = writeln!(out, "  {line}");
        }

        for pair in skill.professions().pairs_at_level(level) {
            let _ = writeln!(
                out,
                "  Choose: {} ({}) | {} ({})",
                pair.first.name(translations),
                pair.first.description(translations),
                pair.second.name(translations),
                pair.second.description(translations)
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use cooking_content::TranslationTable;
    use cooking_core::{CookingConfig, SkillSources, SpriteSheet};

    use super::*;

    fn skill() -> SkillDefinition {
        let values: HashMap<String, String> = [
            ("MaxFoodStackPerDayForExperienceGains", "20"),
            ("CraftNettleTeaLevel", "3"),
            ("GiftBoostValue", "10"),
            ("SalePriceModifier", "1.2"),
            ("ExtraPortionChance", "0.2"),
            ("RestorationValue", "35"),
            ("RestorationAltValue", "5"),
            ("BuffRateValue", "3"),
            ("BuffDurationValue", "36"),
            ("BurnChanceReduction", "0.5"),
            ("BurnChanceModifier", "1"),
            ("ExperienceBarColor", "1 2 3"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let recipes = HashMap::from([("5".to_string(), vec!["Pumpkin Soup".to_string()])]);
        let starting = vec!["Fried Egg".to_string()];

        SkillDefinition::build(
            SkillSources {
                values: &values,
                level_recipes: &recipes,
                starting_recipes: &starting,
            },
            &SpriteSheet::blank(128, 288),
            &CookingConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn renders_level_block() {
        let mut translations = TranslationTable::new();
        translations.insert("menu.cooking_recipe.buff.12", "Cooking");
        translations.insert("menu.cooking_skill.levelup_burn", "-{{Number}}% burn");
        let config = CookingConfig::default();
        let env = SkillEnv::new(&translations, &config);

        let text = render(&skill(), &env, 5..=5);

        assert!(
            text.starts_with("Cooking [blueberry.LoveOfCooking.CookingSkill] bar color 1 2 3\n")
        );
        assert!(text.contains("Starting recipes: Fried Egg\n"));
        assert!(text.contains("Level 5 (2150 xp)\n"));
        assert!(text.contains("  Recipes: Pumpkin Soup\n"));
        assert!(text.contains("  -2.50% burn\n"));
        assert!(text.contains("  Choose: (no translation:menu.cooking_skill.tier1_path1.name)"));
    }
}
