//! Name-keyed binding of raw configuration strings onto typed fields.
//!
//! A target type declares its schema once through [`ScalarFields`]: every field
//! name, its kind, and an accessor to the field. [`bind`] then walks that schema
//! and coerces the matching raw strings. Fields are independent, so binding
//! order never matters.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::SkillError;

/// Raw configuration table: field name → unparsed value.
pub type RawConfigTable = HashMap<String, String>;

/// Declared kind of a scalar field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ScalarKind {
    Integer,
    Float,
    Double,
    /// Space-separated "R G B" triple.
    #[strum(serialize = "rgb triple")]
    RgbTriple,
    /// Declared but never coerced.
    Opaque,
}

/// Where a bound value lands in the target.
pub enum FieldSlot<T> {
    Integer(fn(&mut T) -> &mut i32),
    Float(fn(&mut T) -> &mut f32),
    Double(fn(&mut T) -> &mut f64),
    /// Left untouched by the binder; its key is not required.
    Opaque,
}

impl<T> FieldSlot<T> {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Integer(_) => ScalarKind::Integer,
            Self::Float(_) => ScalarKind::Float,
            Self::Double(_) => ScalarKind::Double,
            Self::Opaque => ScalarKind::Opaque,
        }
    }

    fn is_coerced(&self) -> bool {
        !matches!(self, Self::Opaque)
    }
}

/// One entry of a target's declared schema.
pub struct FieldSpec<T> {
    pub name: &'static str,
    pub slot: FieldSlot<T>,
}

impl<T> FieldSpec<T> {
    pub fn integer(name: &'static str, accessor: fn(&mut T) -> &mut i32) -> Self {
        Self {
            name,
            slot: FieldSlot::Integer(accessor),
        }
    }

    pub fn float(name: &'static str, accessor: fn(&mut T) -> &mut f32) -> Self {
        Self {
            name,
            slot: FieldSlot::Float(accessor),
        }
    }

    pub fn double(name: &'static str, accessor: fn(&mut T) -> &mut f64) -> Self {
        Self {
            name,
            slot: FieldSlot::Double(accessor),
        }
    }

    pub fn opaque(name: &'static str) -> Self {
        Self {
            name,
            slot: FieldSlot::Opaque,
        }
    }
}

/// Types whose scalar fields are populated from a [`RawConfigTable`].
pub trait ScalarFields: Sized {
    /// The statically declared schema, one entry per field.
    fn field_specs() -> Vec<FieldSpec<Self>>;
}

/// Coerces every declared field of `target` from `table`.
///
/// # Errors
///
/// - `SkillError::MissingKey` if a coerced field has no entry in `table`
/// - `SkillError::TypeCoercion` if an entry does not parse as the field's kind
pub fn bind<T: ScalarFields>(target: &mut T, table: &RawConfigTable) -> Result<(), SkillError> {
    for spec in T::field_specs() {
        if !spec.slot.is_coerced() {
            continue;
        }

        let raw = table.get(spec.name).ok_or_else(|| SkillError::MissingKey {
            key: spec.name.to_string(),
        })?;

        let kind = spec.slot.kind();
        match spec.slot {
            FieldSlot::Integer(field) => *field(target) = coerce(spec.name, raw, kind)?,
            FieldSlot::Float(field) => *field(target) = coerce(spec.name, raw, kind)?,
            FieldSlot::Double(field) => *field(target) = coerce(spec.name, raw, kind)?,
            FieldSlot::Opaque => {}
        }
    }
    Ok(())
}

/// Lists every coerced field of `T` that `table` does not provide.
pub fn missing_keys<T: ScalarFields>(table: &RawConfigTable) -> Vec<&'static str> {
    T::field_specs()
        .into_iter()
        .filter(|spec| spec.slot.is_coerced() && !table.contains_key(spec.name))
        .map(|spec| spec.name)
        .collect()
}

/// Parses `raw` (surrounding whitespace allowed) as `V`.
pub(crate) fn coerce<V: FromStr>(key: &str, raw: &str, kind: ScalarKind) -> Result<V, SkillError> {
    raw.trim().parse().map_err(|_| SkillError::TypeCoercion {
        key: key.to_string(),
        value: raw.to_string(),
        kind,
    })
}
