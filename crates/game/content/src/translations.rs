//! Key → template translation table.
//!
//! Templates carry `{{Token}}` placeholders. Token names match
//! case-insensitively; unknown placeholders are left in the text untouched.

use std::collections::HashMap;

use cooking_core::{Tokens, Translation, TranslationOracle};

/// In-memory translation table for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Layers `other` on top of this table; its entries win.
    pub fn merge(&mut self, other: TranslationTable) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TranslationOracle for TranslationTable {
    fn lookup(&self, key: &str, tokens: &Tokens) -> Translation {
        match self.entries.get(key) {
            Some(template) => Translation::new(key, substitute(template, tokens)),
            None => Translation::missing(key),
        }
    }
}

fn substitute(template: &str, tokens: &Tokens) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        out.push_str(&rest[..start]);

        let placeholder = &rest[start..start + 2 + len + 2];
        let name = rest[start + 2..start + 2 + len].trim();
        match tokens
            .iter()
            .find(|(token, _)| token.eq_ignore_ascii_case(name))
        {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(placeholder),
        }
        rest = &rest[start + 2 + len + 2..];
    }

    out.push_str(rest);
    out
}
