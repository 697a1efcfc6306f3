//! Common error infrastructure for cooking-core.
//!
//! Every failure that can happen while assembling a skill definition is a
//! [`SkillError`]. Construction is all-or-nothing: any error abandons the whole
//! definition, so callers only ever see a fully built skill or an error.
//!
//! # Design Principles
//!
//! - **Type Safety**: One variant per failure class, carrying the offending key or count
//! - **Severity Classification**: Errors are categorized for logging and recovery strategies
//! - **Stable Codes**: Each variant maps to a static error code for logs and tests

use crate::env::Region;
use crate::skill::ScalarKind;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Data files are wrong; fix the data and reload
/// - **Internal**: The code's assumptions about catalogue shape were violated
/// - **Fatal**: A collaborator could not provide a required resource
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Invalid input data, should not retry without changes.
    ///
    /// Examples: missing scalar key, unparsable value, bad level label
    Validation,

    /// Unexpected shape mismatch between data and code.
    ///
    /// Examples: profession count differs from the paired layout
    Internal,

    /// Required resource unavailable, registration cannot continue.
    ///
    /// Examples: icon region outside the sprite sheet
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all cooking-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait SkillDataError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while building a skill definition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillError {
    /// A declared scalar field has no entry in the configuration table.
    #[error("missing configuration key '{key}'")]
    MissingKey { key: String },

    /// A raw value could not be parsed as the field's declared kind.
    #[error("value '{value}' for key '{key}' is not a valid {kind}")]
    TypeCoercion {
        key: String,
        value: String,
        kind: ScalarKind,
    },

    /// A level→recipe table key is not a non-negative integer.
    #[error("recipe table key '{key}' is not a valid level")]
    MalformedLevelKey { key: String },

    /// The profession catalogue received the wrong number of definitions.
    #[error("profession catalogue expects {expected} professions, got {actual}")]
    CatalogueSize { expected: usize, actual: usize },

    /// An icon region does not fit inside the sprite sheet.
    #[error("sprite region {region} is outside the {width}x{height} sheet")]
    SpriteRegionOutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },
}

impl SkillDataError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        use SkillError::*;
        match self {
            MissingKey { .. } | TypeCoercion { .. } | MalformedLevelKey { .. } => {
                ErrorSeverity::Validation
            }
            CatalogueSize { .. } => ErrorSeverity::Internal,
            SpriteRegionOutOfBounds { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use SkillError::*;
        match self {
            MissingKey { .. } => "SKILL_MISSING_KEY",
            TypeCoercion { .. } => "SKILL_TYPE_COERCION",
            MalformedLevelKey { .. } => "SKILL_MALFORMED_LEVEL_KEY",
            CatalogueSize { .. } => "SKILL_CATALOGUE_SIZE",
            SpriteRegionOutOfBounds { .. } => "SKILL_SPRITE_OUT_OF_BOUNDS",
        }
    }
}
