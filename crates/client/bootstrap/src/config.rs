//! Bootstrap configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to locate content and register the cooking skill.
#[derive(Clone, Debug, Default)]
pub struct BootstrapConfig {
    /// Directory holding the skill data files. `None` picks the bundled data.
    pub data_dir: Option<PathBuf>,
    /// Translation locale overlaid on the default strings.
    pub locale: Option<String>,
    /// Forces debug logging on or off regardless of `config.toml`.
    pub debug_mode: Option<bool>,
}

impl BootstrapConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Skill data directory (default: bundled data)
    /// - `COOKING_LOCALE` - Translation locale (default: none)
    /// - `COOKING_DEBUG` - Override debug mode from `config.toml`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("CONTENT_DATA_DIR").ok().map(PathBuf::from);
        config.locale = env::var("COOKING_LOCALE").ok().filter(|l| !l.is_empty());

        if let Ok(raw) = env::var("COOKING_DEBUG") {
            config.debug_mode = Some(parse_flag(&raw));
        }

        config
    }

    /// Resolves the data directory.
    ///
    /// This tries to find the data directory in the following order:
    /// 1. The configured `data_dir`
    /// 2. Relative to current directory (crates/game/content/data)
    /// 3. The data directory bundled with cooking-content at build time
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        let relative = env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("crates/game/content/data");
        if relative.exists() {
            return relative;
        }

        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../game/content/data")
    }
}

/// Reads a switch variable. Setting it without a value counts as on.
fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
