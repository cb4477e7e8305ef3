//! Owned pantry snapshot for a single planning run.
//!
//! The caller's ingredient list is cloned once at the start of a run and all
//! deductions happen on that copy. Quantities only ever go down and are
//! clamped at zero.

use ingredient_units::{canonical_unit, convert_from_base, convert_to_base, units_compatible};

use crate::types::{Deduction, IngredientOnHand, IngredientUsage};

/// Slack for floating point comparisons of quantities.
const QUANTITY_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Default)]
pub struct Pantry {
    items: Vec<IngredientOnHand>,
}

impl Pantry {
    /// Clone the caller's pantry, recording each item's starting quantity.
    pub fn snapshot(items: &[IngredientOnHand]) -> Self {
        let items = items
            .iter()
            .cloned()
            .map(|mut item| {
                item.quantity = item.quantity.max(0.0);
                item.original_quantity = item.quantity;
                item
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[IngredientOnHand] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when nothing is left (also true for an empty pantry).
    pub fn is_depleted(&self) -> bool {
        self.items.iter().all(|item| item.quantity <= 0.0)
    }

    /// Whether every deduction could be taken from the current quantities.
    ///
    /// Deductions against the same item accumulate, so two recipe lines that
    /// both draw on "rice" must fit together.
    pub fn can_cover(&self, deductions: &[Deduction]) -> bool {
        let mut trial = self.clone();
        for deduction in deductions {
            let Some(item) = trial.items.iter().find(|i| i.id == deduction.ingredient_id) else {
                return false;
            };
            if !covers(item, deduction.quantity, deduction.unit.as_deref()) {
                return false;
            }
            trial.deduct(deduction);
        }
        true
    }

    /// Take every deduction out of the pantry.
    pub fn apply(&mut self, deductions: &[Deduction]) {
        for deduction in deductions {
            self.deduct(deduction);
        }
    }

    fn deduct(&mut self, deduction: &Deduction) {
        let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.id == deduction.ingredient_id)
        else {
            return;
        };

        // Incompatible units fall back to subtracting the raw quantity.
        let amount = amount_in_unit(
            deduction.quantity,
            deduction.unit.as_deref(),
            item.unit.as_deref(),
        )
        .unwrap_or(deduction.quantity);

        item.quantity = (item.quantity - amount).max(0.0);
    }

    /// Original, used, and remaining quantity of each item, in input order.
    pub fn usage(&self) -> Vec<IngredientUsage> {
        self.items
            .iter()
            .map(|item| IngredientUsage {
                ingredient_id: item.id,
                name: item.name.clone(),
                unit: item.unit.clone(),
                original_quantity: item.original_quantity,
                used_quantity: (item.original_quantity - item.quantity).max(0.0),
                remaining_quantity: item.quantity,
            })
            .collect()
    }
}

/// Whether `item` holds at least `quantity` of `unit`.
///
/// Incompatible units count as covered whenever the item is present.
pub(crate) fn covers(item: &IngredientOnHand, quantity: f64, unit: Option<&str>) -> bool {
    if !item.is_available() {
        return false;
    }
    match amount_in_unit(quantity, unit, item.unit.as_deref()) {
        Some(needed) => item.quantity + QUANTITY_EPSILON >= needed,
        None => true,
    }
}

/// Express `quantity` of `from` in `to` units.
///
/// Absent or identical units pass the quantity through. Compatible units go
/// through the family base unit; when a count unit blocks that conversion the
/// raw quantity is used. Incompatible units return `None`.
pub(crate) fn amount_in_unit(quantity: f64, from: Option<&str>, to: Option<&str>) -> Option<f64> {
    let (Some(from), Some(to)) = (from, to) else {
        return Some(quantity);
    };
    if canonical_unit(from) == canonical_unit(to) {
        return Some(quantity);
    }
    if !units_compatible(Some(from), Some(to)) {
        return None;
    }
    let converted = convert_to_base(quantity, Some(from))
        .and_then(|base| convert_from_base(base, Some(to)));
    Some(converted.unwrap_or(quantity))
}
