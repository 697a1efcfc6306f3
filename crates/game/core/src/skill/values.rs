//! Balance values of the cooking skill, bound from the skill values table.

use crate::env::Rgba;
use crate::error::SkillError;
use crate::skill::binder::{FieldSpec, RawConfigTable, ScalarFields, ScalarKind, coerce};

/// Scalar balance values declared by the cooking skill.
///
/// Field names in the data table are the PascalCase names listed in
/// [`ScalarFields::field_specs`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CookingSkillValues {
    pub max_food_stack_per_day_for_experience_gains: i32,
    pub craft_nettle_tea_level: i32,

    pub gift_boost_value: i32,
    pub sale_price_modifier: f32,
    pub extra_portion_chance: f32,
    pub restoration_value: i32,
    pub restoration_alt_value: i32,
    pub buff_rate_value: i32,
    pub buff_duration_value: i32,

    pub burn_chance_reduction: f32,
    pub burn_chance_modifier: f32,
}

type Spec = FieldSpec<CookingSkillValues>;

impl ScalarFields for CookingSkillValues {
    fn field_specs() -> Vec<FieldSpec<Self>> {
        vec![
            Spec::integer("MaxFoodStackPerDayForExperienceGains", |v| {
                &mut v.max_food_stack_per_day_for_experience_gains
            }),
            Spec::integer("CraftNettleTeaLevel", |v| &mut v.craft_nettle_tea_level),
            Spec::integer("GiftBoostValue", |v| &mut v.gift_boost_value),
            Spec::float("SalePriceModifier", |v| &mut v.sale_price_modifier),
            Spec::float("ExtraPortionChance", |v| &mut v.extra_portion_chance),
            Spec::integer("RestorationValue", |v| &mut v.restoration_value),
            Spec::integer("RestorationAltValue", |v| &mut v.restoration_alt_value),
            Spec::integer("BuffRateValue", |v| &mut v.buff_rate_value),
            Spec::integer("BuffDurationValue", |v| &mut v.buff_duration_value),
            Spec::float("BurnChanceReduction", |v| &mut v.burn_chance_reduction),
            Spec::float("BurnChanceModifier", |v| &mut v.burn_chance_modifier),
            // Registered under the skill's asset prefix, never read from data.
            Spec::opaque("InternalName"),
        ]
    }
}

impl CookingSkillValues {
    /// Sale price bonus as a whole percentage, e.g. 1.15 → 15.
    pub fn sale_value_percent(&self) -> i64 {
        let percent = (self.sale_price_modifier - 1.0) * 100.0;
        round_decimal(percent, 0).unwrap_or(0)
    }

    /// Burn chance reduction granted at `level`.
    pub fn burn_chance_at(&self, level: u32) -> f32 {
        level as f32 * self.burn_chance_modifier * self.burn_chance_reduction
    }

    /// Burn chance at `level` as shown to players, with two decimals.
    pub fn burn_chance_text(&self, level: u32) -> String {
        format_decimal(self.burn_chance_at(level), 2)
    }
}

/// Significant digits a single-precision value is displayed with.
const DISPLAY_DIGITS: usize = 7;

/// Rounds `value` to `decimals` places, returning it scaled by `10^decimals`.
///
/// The value is first cut to [`DISPLAY_DIGITS`] significant digits, so 0.045
/// stored as 0.044999998 still rounds up. Ties round away from zero.
/// Returns `None` for non-finite or out-of-range values.
fn round_decimal(value: f32, decimals: u32) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }

    // "d.dddddde-X": seven significant digits and a decimal exponent.
    let scientific = format!("{:.*e}", DISPLAY_DIGITS - 1, value);
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;
    let digits: i64 = mantissa.replace(['.', '-'], "").parse().ok()?;
    let negative = mantissa.starts_with('-');

    let shift = exponent - (DISPLAY_DIGITS as i32 - 1) + decimals as i32;
    let magnitude = if shift >= 0 {
        digits.checked_mul(10_i64.checked_pow(shift as u32)?)?
    } else if -shift > DISPLAY_DIGITS as i32 {
        0
    } else {
        let divisor = 10_i64.pow((-shift) as u32);
        let (quotient, remainder) = (digits / divisor, digits % divisor);
        if remainder * 2 >= divisor {
            quotient + 1
        } else {
            quotient
        }
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Formats `value` with exactly `decimals` places using [`round_decimal`].
fn format_decimal(value: f32, decimals: u32) -> String {
    let Some(scaled) = round_decimal(value, decimals) else {
        return format!("{value:.*}", decimals as usize);
    };
    if decimals == 0 {
        return scaled.to_string();
    }

    let unit = 10_i64.pow(decimals);
    let sign = if scaled < 0 { "-" } else { "" };
    let magnitude = scaled.unsigned_abs();
    format!(
        "{sign}{}.{:0width$}",
        magnitude / unit as u64,
        magnitude % unit as u64,
        width = decimals as usize
    )
}

/// Table key holding the experience bar color.
pub const EXPERIENCE_BAR_COLOR_KEY: &str = "ExperienceBarColor";

/// Parses the "R G B" experience bar color from the values table.
///
/// # Errors
///
/// - `SkillError::MissingKey` if the key is absent
/// - `SkillError::TypeCoercion` unless the value is three integers in 0..=255
pub fn experience_bar_color(table: &RawConfigTable) -> Result<Rgba, SkillError> {
    let raw = table
        .get(EXPERIENCE_BAR_COLOR_KEY)
        .ok_or_else(|| SkillError::MissingKey {
            key: EXPERIENCE_BAR_COLOR_KEY.to_string(),
        })?;

    let channels = raw
        .split_whitespace()
        .map(|part| coerce::<u8>(EXPERIENCE_BAR_COLOR_KEY, part, ScalarKind::RgbTriple))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| rgb_error(raw))?;

    match channels.as_slice() {
        [r, g, b] => Ok(Rgba::opaque(*r, *g, *b)),
        _ => Err(rgb_error(raw)),
    }
}

fn rgb_error(raw: &str) -> SkillError {
    SkillError::TypeCoercion {
        key: EXPERIENCE_BAR_COLOR_KEY.to_string(),
        value: raw.to_string(),
        kind: ScalarKind::RgbTriple,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::binder::{bind, missing_keys};

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
            ("BurnChanceReduction", "0.015"),
            ("BurnChanceModifier", "1.5"),
            ("ExperienceBarColor", "146 111 91"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn binds_all_cooking_values() {
        let mut values = CookingSkillValues::default();
        bind(&mut values, &values_table()).unwrap();

        assert_eq!(values.max_food_stack_per_day_for_experience_gains, 20);
        assert_eq!(values.craft_nettle_tea_level, 3);
        assert_eq!(values.sale_price_modifier, 1.15);
        assert_eq!(values.restoration_alt_value, 5);
        assert_eq!(values.burn_chance_modifier, 1.5);
        assert!(missing_keys::<CookingSkillValues>(&values_table()).is_empty());
    }

    #[test]
    fn sale_value_rounds_to_whole_percent() {
        let values = CookingSkillValues {
            sale_price_modifier: 1.15,
            ..Default::default()
        };
        assert_eq!(values.sale_value_percent(), 15);
    }

    #[test]
    fn sale_value_rounds_ties_up() {
        let values = CookingSkillValues {
            sale_price_modifier: 1.155,
            ..Default::default()
        };
        assert_eq!(values.sale_value_percent(), 16);
    }

    #[test]
    fn burn_chance_text_rounds_displayed_ties_up() {
        let values = CookingSkillValues {
            burn_chance_modifier: 1.5,
            burn_chance_reduction: 0.015,
            ..Default::default()
        };
        assert_eq!(values.burn_chance_text(0), "0.00");
        assert_eq!(values.burn_chance_text(2), "0.05");
        assert_eq!(values.burn_chance_text(6), "0.14");
        assert_eq!(values.burn_chance_text(10), "0.23");
    }

    #[test]
    fn decimal_formatting_pads_and_signs() {
        assert_eq!(format_decimal(3.0, 2), "3.00");
        assert_eq!(format_decimal(12.345_67, 2), "12.35");
        assert_eq!(format_decimal(-0.125, 2), "-0.13");
        assert_eq!(format_decimal(0.004, 2), "0.00");
        assert_eq!(format_decimal(2.5, 0), "3");
        assert_eq!(round_decimal(f32::NAN, 2), None);
    }

    #[test]
    fn parses_experience_bar_color() {
        assert_eq!(
            experience_bar_color(&values_table()).unwrap(),
            Rgba::opaque(146, 111, 91)
        );
    }

    #[test]
    fn rejects_malformed_color() {
        let mut table = values_table();
        table.insert(EXPERIENCE_BAR_COLOR_KEY.into(), "146 111".into());
        assert!(matches!(
            experience_bar_color(&table),
            Err(SkillError::TypeCoercion {
                kind: ScalarKind::RgbTriple,
                ..
            })
        ));

        table.insert(EXPERIENCE_BAR_COLOR_KEY.into(), "300 0 0".into());
        assert!(experience_bar_color(&table).is_err());

        table.remove(EXPERIENCE_BAR_COLOR_KEY);
        assert!(matches!(
            experience_bar_color(&table),
            Err(SkillError::MissingKey { .. })
        ));
    }
}
