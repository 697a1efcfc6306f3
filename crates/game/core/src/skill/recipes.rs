//! Recipes granted at each skill level.

use std::collections::HashMap;

use crate::error::SkillError;

/// Raw level→recipe table: level label → recipe ids.
pub type RawLevelRecipeTable = HashMap<String, Vec<String>>;

/// Recipes unlocked on reaching one level, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeLevelEntry {
    pub level: u32,
    pub recipes: Vec<String>,
}

/// Level-ordered catalogue of recipe unlocks.
///
/// Recipe ids are kept exactly as given: duplicates within or across levels
/// are not collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelRecipeTable {
    entries: Vec<RecipeLevelEntry>,
}

impl LevelRecipeTable {
    /// Builds the catalogue from a raw table.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::MalformedLevelKey` if a key is not made of ASCII
    /// digits only, or if two keys name the same level (e.g. "5" and "05").
    /// A duplicate is reported under the later of the two labels in sort order.
    pub fn build(raw: &RawLevelRecipeTable) -> Result<Self, SkillError> {
        let mut labels: Vec<&String> = raw.keys().collect();
        labels.sort();

        let mut levels = labels
            .into_iter()
            .map(|label| Ok((parse_level(label)?, label)))
            .collect::<Result<Vec<_>, SkillError>>()?;

        levels.sort_by_key(|&(level, _)| level);
        if let Some(pair) = levels.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(SkillError::MalformedLevelKey {
                key: pair[1].1.clone(),
            });
        }

        let entries = levels
            .into_iter()
            .map(|(level, label)| RecipeLevelEntry {
                level,
                recipes: raw[label].clone(),
            })
            .collect();

        Ok(Self { entries })
    }

    /// All entries in ascending level order.
    pub fn entries(&self) -> &[RecipeLevelEntry] {
        &self.entries
    }

    /// Recipes granted exactly at `level`.
    pub fn recipes_at(&self, level: u32) -> &[String] {
        self.entries
            .binary_search_by_key(&level, |entry| entry.level)
            .map(|i| self.entries[i].recipes.as_slice())
            .unwrap_or(&[])
    }

    /// Every recipe granted at or below `level`, lowest level first.
    pub fn unlocked_through(&self, level: u32) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .take_while(move |entry| entry.level <= level)
            .flat_map(|entry| entry.recipes.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_level(label: &str) -> Result<u32, SkillError> {
    let malformed = || SkillError::MalformedLevelKey {
        key: label.to_string(),
    };
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    label.parse().map_err(|_| malformed())
}
