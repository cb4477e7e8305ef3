//! Unit table and conversion helpers.
//!
//! Volume factors are milliliters per unit, weight factors are grams per
//! unit. Count units carry no factor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Volume conversion factors to milliliters (the base unit for volume).
pub const ML_PER_TSP: f64 = 4.92892;
pub const ML_PER_TBSP: f64 = 14.7868;
pub const ML_PER_FL_OZ: f64 = 29.5735;
pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_PINT: f64 = 473.176;
pub const ML_PER_QUART: f64 = 946.353;
pub const ML_PER_GALLON: f64 = 3785.41;

const GRAMS_PER_OZ: f64 = 28.3495;
const GRAMS_PER_LB: f64 = 453.592;

/// Measurement family a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    Volume,
    Weight,
    Count,
}

// =============================================================================
// Unit table
// =============================================================================

/// Canonical unit symbol, family, and factor to the family's base unit.
const UNIT_TABLE: &[(&str, UnitFamily, Option<f64>)] = &[
    // Volume
    ("tsp", UnitFamily::Volume, Some(ML_PER_TSP)),
    ("tbsp", UnitFamily::Volume, Some(ML_PER_TBSP)),
    ("fl oz", UnitFamily::Volume, Some(ML_PER_FL_OZ)),
    ("cup", UnitFamily::Volume, Some(ML_PER_CUP)),
    ("pint", UnitFamily::Volume, Some(ML_PER_PINT)),
    ("quart", UnitFamily::Volume, Some(ML_PER_QUART)),
    ("gallon", UnitFamily::Volume, Some(ML_PER_GALLON)),
    ("ml", UnitFamily::Volume, Some(1.0)),
    ("l", UnitFamily::Volume, Some(1000.0)),
    // Weight
    ("mg", UnitFamily::Weight, Some(0.001)),
    ("g", UnitFamily::Weight, Some(1.0)),
    ("kg", UnitFamily::Weight, Some(1000.0)),
    ("oz", UnitFamily::Weight, Some(GRAMS_PER_OZ)),
    ("lb", UnitFamily::Weight, Some(GRAMS_PER_LB)),
    // Count
    ("piece", UnitFamily::Count, None),
    ("whole", UnitFamily::Count, None),
    ("clove", UnitFamily::Count, None),
    ("can", UnitFamily::Count, None),
    ("jar", UnitFamily::Count, None),
    ("package", UnitFamily::Count, None),
    ("bunch", UnitFamily::Count, None),
    ("slice", UnitFamily::Count, None),
    ("pinch", UnitFamily::Count, None),
    ("dash", UnitFamily::Count, None),
    ("drop", UnitFamily::Count, None),
    ("stick", UnitFamily::Count, None),
    ("head", UnitFamily::Count, None),
    ("sprig", UnitFamily::Count, None),
    ("stalk", UnitFamily::Count, None),
    ("bag", UnitFamily::Count, None),
    ("box", UnitFamily::Count, None),
    ("bottle", UnitFamily::Count, None),
    ("cube", UnitFamily::Count, None),
    ("handful", UnitFamily::Count, None),
    ("small", UnitFamily::Count, None),
    ("medium", UnitFamily::Count, None),
    ("large", UnitFamily::Count, None),
];

/// Alternate spellings mapped to their canonical symbol.
/// Canonical symbols map to themselves implicitly.
const UNIT_ALIASES: &[(&str, &str)] = &[
    // Volume - US
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    ("ts", "tsp"),
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("tbs", "tbsp"),
    ("tb", "tbsp"),
    ("fluid ounce", "fl oz"),
    ("fluid ounces", "fl oz"),
    ("fl. oz", "fl oz"),
    ("floz", "fl oz"),
    ("cups", "cup"),
    ("c", "cup"),
    ("pints", "pint"),
    ("pt", "pint"),
    ("quarts", "quart"),
    ("qt", "quart"),
    ("gallons", "gallon"),
    ("gal", "gallon"),
    // Volume - Metric
    ("milliliter", "ml"),
    ("milliliters", "ml"),
    ("millilitre", "ml"),
    ("millilitres", "ml"),
    ("liter", "l"),
    ("liters", "l"),
    ("litre", "l"),
    ("litres", "l"),
    // Weight - US
    ("ounce", "oz"),
    ("ounces", "oz"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("lbs", "lb"),
    // Weight - Metric
    ("milligram", "mg"),
    ("milligrams", "mg"),
    ("gram", "g"),
    ("grams", "g"),
    ("gr", "g"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("kgs", "kg"),
    // Count
    ("pieces", "piece"),
    ("pc", "piece"),
    ("pcs", "piece"),
    ("cloves", "clove"),
    ("cans", "can"),
    ("jars", "jar"),
    ("packages", "package"),
    ("pkg", "package"),
    ("pkgs", "package"),
    ("bunches", "bunch"),
    ("slices", "slice"),
    ("pinches", "pinch"),
    ("dashes", "dash"),
    ("drops", "drop"),
    ("sticks", "stick"),
    ("heads", "head"),
    ("sprigs", "sprig"),
    ("stalks", "stalk"),
    ("bags", "bag"),
    ("boxes", "box"),
    ("bottles", "bottle"),
    ("cubes", "cube"),
    ("handfuls", "handful"),
    ("extra-large", "large"),
    ("xl", "large"),
];

static UNITS: LazyLock<HashMap<&'static str, (UnitFamily, Option<f64>)>> = LazyLock::new(|| {
    UNIT_TABLE
        .iter()
        .map(|&(symbol, family, factor)| (symbol, (family, factor)))
        .collect()
});

static ALIASES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| UNIT_ALIASES.iter().copied().collect());

// =============================================================================
// Public API
// =============================================================================

/// Fold a unit spelling to its canonical symbol.
///
/// Matching is case-insensitive and ignores a trailing period ("Tbsp.").
/// Unknown units come back lowercased so two identical unknown spellings
/// still compare equal.
pub fn canonical_unit(unit: &str) -> String {
    let lower = unit.trim().to_lowercase();
    let key = lower.trim_end_matches('.').trim_end();
    match ALIASES.get(key) {
        Some(canonical) => (*canonical).to_string(),
        None => key.to_string(),
    }
}

/// Family of a unit, or `None` when the unit is unknown.
pub fn unit_family(unit: &str) -> Option<UnitFamily> {
    UNITS.get(canonical_unit(unit).as_str()).map(|(family, _)| *family)
}

/// Factor from `unit` to its family's base unit. Count units have none.
pub fn unit_factor(unit: &str) -> Option<f64> {
    UNITS
        .get(canonical_unit(unit).as_str())
        .and_then(|(_, factor)| *factor)
}

/// Convert a quantity to its family's base unit (ml or g).
///
/// Returns `None` when the unit is absent, unknown, or count-typed.
pub fn convert_to_base(quantity: f64, unit: Option<&str>) -> Option<f64> {
    let factor = unit_factor(present(unit)?)?;
    Some(quantity * factor)
}

/// Convert a base-unit quantity (ml or g) back into `unit`.
pub fn convert_from_base(base_quantity: f64, unit: Option<&str>) -> Option<f64> {
    let factor = unit_factor(present(unit)?)?;
    Some(base_quantity / factor)
}

/// Whether quantities in the two units can be compared.
///
/// True when the units are identical, either is absent, or both belong to
/// the same family.
pub fn units_compatible(a: Option<&str>, b: Option<&str>) -> bool {
    let (Some(a), Some(b)) = (present(a), present(b)) else {
        return true;
    };

    let a = canonical_unit(a);
    let b = canonical_unit(b);
    if a == b {
        return true;
    }

    match (UNITS.get(a.as_str()), UNITS.get(b.as_str())) {
        (Some((family_a, _)), Some((family_b, _))) => family_a == family_b,
        _ => false,
    }
}

/// Treat blank unit strings the same as a missing unit.
fn present(unit: Option<&str>) -> Option<&str> {
    unit.filter(|u| !u.trim().is_empty())
}
