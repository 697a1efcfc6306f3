//! Translation oracle for human-readable strings.
//!
//! The skill never formats player-facing text itself; it asks the oracle for a
//! key plus named tokens and passes the result through.

use std::collections::BTreeMap;
use std::fmt;

/// Named token values substituted into a translation template.
pub type Tokens = BTreeMap<String, String>;

/// Result of a translation lookup.
///
/// A lookup may come back empty. Rendering an empty translation yields a
/// placeholder naming the key so missing strings are visible in-game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    key: String,
    text: Option<String>,
}

impl Translation {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: Some(text.into()),
        }
    }

    /// Creates a translation that has no value for `key`.
    pub fn missing(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: None,
        }
    }

    pub fn has_value(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.is_empty())
    }

    /// Returns the translated text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => f.write_str(text),
            None => write!(f, "(no translation:{})", self.key),
        }
    }
}

impl From<Translation> for String {
    fn from(translation: Translation) -> Self {
        translation.to_string()
    }
}

/// Provides translated strings by key.
pub trait TranslationOracle: Send + Sync {
    /// Looks up `key` and substitutes `tokens` into the template.
    fn lookup(&self, key: &str, tokens: &Tokens) -> Translation;

    /// Looks up `key` without tokens.
    fn get(&self, key: &str) -> Translation {
        self.lookup(key, &Tokens::new())
    }
}
