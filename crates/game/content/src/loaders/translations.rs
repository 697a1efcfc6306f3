//! Translation file loader.

use std::collections::HashMap;
use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::translations::TranslationTable;

/// Loader for `i18n/{locale}.ron` translation files.
pub struct TranslationLoader;

impl TranslationLoader {
    /// Load one translation file.
    ///
    /// File format: `HashMap<String, String>` of key → template.
    pub fn load(path: &Path) -> LoadResult<TranslationTable> {
        let content = read_file(path)?;
        let entries: HashMap<String, String> = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse translations RON at {:?}: {}", path, e)
        })?;

        Ok(TranslationTable::from_entries(entries))
    }

    /// Load the default locale, overlaid with `locale` when that file exists.
    ///
    /// Expected directory structure:
    /// ```text
    /// i18n/
    ///   ├── default.ron
    ///   └── fr.ron
    /// ```
    pub fn load_locale(i18n_dir: &Path, locale: Option<&str>) -> LoadResult<TranslationTable> {
        let mut table = Self::load(&i18n_dir.join("default.ron"))?;

        if let Some(locale) = locale {
            let path = i18n_dir.join(format!("{locale}.ron"));
            if path.exists() {
                table.merge(Self::load(&path)?);
            } else {
                tracing::warn!(locale, "No translations for locale, using default");
            }
        }

        tracing::debug!(entries = table.len(), "Loaded translations");
        Ok(table)
    }
}
