//! Cooking professions and the paired choices they are offered in.
//!
//! The catalogue is laid out positionally. Six professions sit in index order:
//!
//! ```text
//! index  tier  path  choice   id
//!   0     1     1             menu.cooking_skill.tier1_path1
//!   1     1     2             menu.cooking_skill.tier1_path2
//!   2     2     1     a       menu.cooking_skill.tier2_path1a
//!   3     2     1     b       menu.cooking_skill.tier2_path1b
//!   4     2     2     a       menu.cooking_skill.tier2_path2a
//!   5     2     2     b       menu.cooking_skill.tier2_path2b
//! ```
//!
//! Consecutive indices (0,1), (2,3), (4,5) form the choice pairs. The first pair
//! unlocks at level 5 and every later pair at level 10.

use crate::env::{Icon, Region, Rgba, SpriteOracle, Tokens, Translation, TranslationOracle};
use crate::error::SkillError;
use crate::skill::values::CookingSkillValues;

/// Number of professions the paired layout is built for.
pub const PROFESSION_COUNT: usize = 6;

/// Level at which the first pair is offered.
pub const FIRST_PAIR_UNLOCK_LEVEL: u32 = 5;

/// Level at which every later pair is offered.
pub const LATER_PAIR_UNLOCK_LEVEL: u32 = 10;

/// Side length of a profession icon.
pub const PROFESSION_ICON_SIZE: u32 = 16;

/// Row of the sprite sheet holding profession icons.
pub const PROFESSION_ICON_Y: u32 = 272;

const ALT_VARIANT_INDEX: usize = 1;
const ALT_VARIANT_SUFFIX: &str = "_alt";

/// Second-tier branch within a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Choice {
    A,
    B,
}

/// Position-derived identity of one profession.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProfessionSlot {
    pub index: usize,
    pub tier: u8,
    pub path: u8,
    pub choice: Option<Choice>,
}

impl ProfessionSlot {
    /// Derives tier, path and choice from the catalogue index.
    pub const fn derive(index: usize) -> Self {
        let tier = if index < 2 { 1 } else { 2 };
        let (path, choice) = if tier == 1 {
            (index + 1, None)
        } else if index % 2 == 0 {
            (index / 2, Some(Choice::A))
        } else {
            (index / 2, Some(Choice::B))
        };
        Self {
            index,
            tier,
            path: path as u8,
            choice,
        }
    }

    /// Profession id, e.g. `menu.cooking_skill.tier2_path1a`.
    pub fn id(&self) -> String {
        let choice: &'static str = self.choice.map_or("", Into::into);
        format!(
            "menu.cooking_skill.tier{}_path{}{}",
            self.tier, self.path, choice
        )
    }

    /// Sprite sheet region of this profession's icon.
    pub const fn icon_region(&self) -> Region {
        Region::square(
            PROFESSION_ICON_SIZE + self.index as u32 * PROFESSION_ICON_SIZE,
            PROFESSION_ICON_Y,
            PROFESSION_ICON_SIZE,
        )
    }

    /// Whether this slot uses the `_alt` texts under the given healing mode.
    pub const fn uses_alt_text(&self, food_healing_takes_time: bool) -> bool {
        self.index == ALT_VARIANT_INDEX && !food_healing_takes_time
    }
}

/// Inputs shared by every profession description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfessionTemplate {
    /// Selects the `_alt` texts for the healing profession when false.
    pub food_healing_takes_time: bool,
    pub sale_value: i64,
    pub restoration_alt_value: i64,
}

impl ProfessionTemplate {
    pub fn from_values(values: &CookingSkillValues, food_healing_takes_time: bool) -> Self {
        Self {
            food_healing_takes_time,
            sale_value: values.sale_value_percent(),
            restoration_alt_value: i64::from(values.restoration_alt_value),
        }
    }

    fn description_tokens(&self) -> Tokens {
        Tokens::from([
            ("SaleValue".to_string(), self.sale_value.to_string()),
            (
                "RestorationAltValue".to_string(),
                self.restoration_alt_value.to_string(),
            ),
        ])
    }
}

/// One profession: its id, text keys and icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfessionDefinition {
    pub id: String,
    pub name_key: String,
    pub description_key: String,
    pub description_tokens: Tokens,
    pub icon: Icon,
}

impl ProfessionDefinition {
    /// Builds the profession at `slot` with its already extracted icon.
    pub fn derive(slot: ProfessionSlot, template: &ProfessionTemplate, icon: Icon) -> Self {
        let id = slot.id();
        let variant = if slot.uses_alt_text(template.food_healing_takes_time) {
            ALT_VARIANT_SUFFIX
        } else {
            ""
        };
        Self {
            name_key: format!("{id}{variant}.name"),
            description_key: format!("{id}{variant}.description"),
            description_tokens: template.description_tokens(),
            icon,
            id,
        }
    }

    pub fn name(&self, translations: &dyn TranslationOracle) -> Translation {
        translations.get(&self.name_key)
    }

    pub fn description(&self, translations: &dyn TranslationOracle) -> Translation {
        translations.lookup(&self.description_key, &self.description_tokens)
    }
}

/// Two mutually exclusive professions offered at the same level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfessionPair<'a> {
    pub unlock_level: u32,
    pub first: &'a ProfessionDefinition,
    pub second: &'a ProfessionDefinition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PairSlot {
    unlock_level: u32,
    first: usize,
    second: usize,
}

/// The six cooking professions and their three choice pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfessionCatalogue {
    professions: Vec<ProfessionDefinition>,
    pairs: Vec<PairSlot>,
}

impl ProfessionCatalogue {
    /// Derives all professions, cutting icons from `sprites`.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::SpriteRegionOutOfBounds` if an icon region is not
    /// inside the sheet.
    pub fn build(
        sprites: &dyn SpriteOracle,
        template: &ProfessionTemplate,
    ) -> Result<Self, SkillError> {
        let mut scratch: Vec<Rgba> = Vec::new();
        let professions = (0..PROFESSION_COUNT)
            .map(ProfessionSlot::derive)
            .map(|slot| {
                let icon = sprites.extract_region_with(slot.icon_region(), &mut scratch)?;
                Ok(ProfessionDefinition::derive(slot, template, icon))
            })
            .collect::<Result<Vec<_>, SkillError>>()?;

        Self::from_definitions(professions)
    }

    /// Pairs already built definitions.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::CatalogueSize` unless exactly [`PROFESSION_COUNT`]
    /// definitions are given.
    pub fn from_definitions(professions: Vec<ProfessionDefinition>) -> Result<Self, SkillError> {
        if professions.len() != PROFESSION_COUNT {
            return Err(SkillError::CatalogueSize {
                expected: PROFESSION_COUNT,
                actual: professions.len(),
            });
        }

        let mut pairs: Vec<PairSlot> = Vec::with_capacity(PROFESSION_COUNT / 2);
        for second in (1..professions.len()).step_by(2) {
            let unlock_level = if pairs.is_empty() {
                FIRST_PAIR_UNLOCK_LEVEL
            } else {
                LATER_PAIR_UNLOCK_LEVEL
            };
            pairs.push(PairSlot {
                unlock_level,
                first: second - 1,
                second,
            });
        }

        Ok(Self { professions, pairs })
    }

    /// Professions in index order.
    pub fn professions(&self) -> &[ProfessionDefinition] {
        &self.professions
    }

    pub fn get(&self, id: &str) -> Option<&ProfessionDefinition> {
        self.professions.iter().find(|profession| profession.id == id)
    }

    /// Choice pairs in the order they were formed.
    pub fn pairs(&self) -> impl Iterator<Item = ProfessionPair<'_>> {
        self.pairs.iter().map(|slot| ProfessionPair {
            unlock_level: slot.unlock_level,
            first: &self.professions[slot.first],
            second: &self.professions[slot.second],
        })
    }

    /// Pairs offered on reaching `level`.
    pub fn pairs_at_level(&self, level: u32) -> impl Iterator<Item = ProfessionPair<'_>> {
        self.pairs().filter(move |pair| pair.unlock_level == level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SpriteSheet;

    fn template(food_healing_takes_time: bool) -> ProfessionTemplate {
        ProfessionTemplate {
            food_healing_takes_time,
            sale_value: 15,
            restoration_alt_value: 5,
        }
    }

    fn sheet() -> SpriteSheet {
        let mut sheet = SpriteSheet::blank(128, 288);
        for index in 0..PROFESSION_COUNT as u32 {
            let x = PROFESSION_ICON_SIZE + index * PROFESSION_ICON_SIZE;
            sheet.set_pixel(x, PROFESSION_ICON_Y, Rgba::opaque(index as u8, 0, 0));
        }
        sheet
    }

    fn definitions(count: usize) -> Vec<ProfessionDefinition> {
        (0..count)
            .map(|i| {
                ProfessionDefinition::derive(
                    ProfessionSlot::derive(i % PROFESSION_COUNT),
                    &template(true),
                    Icon::from_pixels(1, 1, vec![]),
                )
            })
            .collect()
    }

    #[test]
    fn slot_derivation_table() {
        let expected = [
            (1, 1, None),
            (1, 2, None),
            (2, 1, Some(Choice::A)),
            (2, 1, Some(Choice::B)),
            (2, 2, Some(Choice::A)),
            (2, 2, Some(Choice::B)),
        ];
        for (index, (tier, path, choice)) in expected.into_iter().enumerate() {
            let slot = ProfessionSlot::derive(index);
            assert_eq!((slot.tier, slot.path, slot.choice), (tier, path, choice));
        }
    }

    #[test]
    fn slot_ids_follow_template() {
        let ids: Vec<String> = (0..PROFESSION_COUNT)
            .map(|i| ProfessionSlot::derive(i).id())
            .collect();
        assert_eq!(
            ids,
            vec![
                "menu.cooking_skill.tier1_path1",
                "menu.cooking_skill.tier1_path2",
                "menu.cooking_skill.tier2_path1a",
                "menu.cooking_skill.tier2_path1b",
                "menu.cooking_skill.tier2_path2a",
                "menu.cooking_skill.tier2_path2b",
            ]
        );
    }

    #[test]
    fn icon_regions_step_along_row() {
        assert_eq!(
            ProfessionSlot::derive(0).icon_region(),
            Region::square(16, 272, 16)
        );
        assert_eq!(
            ProfessionSlot::derive(5).icon_region(),
            Region::square(96, 272, 16)
        );
    }

    #[test]
    fn alt_text_only_for_healing_profession_without_slow_healing() {
        for index in 0..PROFESSION_COUNT {
            let slot = ProfessionSlot::derive(index);
            let icon = Icon::from_pixels(0, 0, vec![]);
            let instant = ProfessionDefinition::derive(slot, &template(false), icon.clone());
            let gradual = ProfessionDefinition::derive(slot, &template(true), icon);

            let id = slot.id();
            assert_eq!(gradual.name_key, format!("{id}.name"));
            assert_eq!(gradual.description_key, format!("{id}.description"));
            if index == 1 {
                assert_eq!(instant.name_key, format!("{id}_alt.name"));
                assert_eq!(instant.description_key, format!("{id}_alt.description"));
            } else {
                assert_eq!(instant.name_key, gradual.name_key);
                assert_eq!(instant.description_key, gradual.description_key);
            }
        }
    }

    #[test]
    fn every_profession_gets_the_same_tokens() {
        let catalogue = ProfessionCatalogue::build(&sheet(), &template(true)).unwrap();
        for profession in catalogue.professions() {
            assert_eq!(profession.description_tokens["SaleValue"], "15");
            assert_eq!(profession.description_tokens["RestorationAltValue"], "5");
        }
    }

    #[test]
    fn six_professions_form_three_pairs() {
        let catalogue = ProfessionCatalogue::from_definitions(definitions(6)).unwrap();
        let pairs: Vec<_> = catalogue.pairs().collect();

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].unlock_level, 5);
        assert_eq!(pairs[1].unlock_level, 10);
        assert_eq!(pairs[2].unlock_level, 10);
        assert_eq!(pairs[0].first.id, "menu.cooking_skill.tier1_path1");
        assert_eq!(pairs[0].second.id, "menu.cooking_skill.tier1_path2");
        assert_eq!(pairs[2].first.id, "menu.cooking_skill.tier2_path2a");
        assert_eq!(pairs[2].second.id, "menu.cooking_skill.tier2_path2b");
        assert_eq!(catalogue.pairs_at_level(10).count(), 2);
        assert_eq!(catalogue.pairs_at_level(7).count(), 0);
    }

    #[test]
    fn wrong_profession_count_is_rejected() {
        for count in [5, 7] {
            let err = ProfessionCatalogue::from_definitions(definitions(count)).unwrap_err();
            assert_eq!(
                err,
                SkillError::CatalogueSize {
                    expected: 6,
                    actual: count
                }
            );
        }
    }

    #[test]
    fn icons_are_independently_owned() {
        let mut catalogue = ProfessionCatalogue::build(&sheet(), &template(true)).unwrap();
        assert_eq!(
            catalogue.professions()[2].icon.pixel(0, 0),
            Some(Rgba::opaque(2, 0, 0))
        );

        catalogue.professions[0]
            .icon
            .set_pixel(0, 0, Rgba::opaque(255, 255, 255));

        for (index, profession) in catalogue.professions().iter().enumerate().skip(1) {
            assert_eq!(
                profession.icon.pixel(0, 0),
                Some(Rgba::opaque(index as u8, 0, 0))
            );
        }
    }

    #[test]
    fn build_fails_when_sheet_is_too_small() {
        let err = ProfessionCatalogue::build(&SpriteSheet::blank(64, 288), &template(true))
            .unwrap_err();
        assert!(matches!(err, SkillError::SpriteRegionOutOfBounds { .. }));
    }

    #[test]
    fn lookup_by_id() {
        let catalogue = ProfessionCatalogue::from_definitions(definitions(6)).unwrap();
        assert!(catalogue.get("menu.cooking_skill.tier2_path1b").is_some());
        assert!(catalogue.get("menu.cooking_skill.tier3_path1").is_none());
    }
}
