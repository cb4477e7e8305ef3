//! Resolve recipe ingredients against the pantry.
//!
//! Strategies are tried in a fixed order and the first hit wins:
//! 1. Exact normalized-name equality
//! 2. Word-prefix ("chicken" vs "chicken breast")
//! 3. Fuzzy edit-distance similarity above a threshold
//!
//! Only pantry items with a positive quantity are considered.

use crate::pantry::covers;
use crate::settings::PlannerSettings;
use crate::text::{is_word_prefix, normalize, similarity};
use crate::types::{IngredientMatchType, IngredientOnHand, RecipeIngredient};

/// Result of matching one recipe ingredient.
///
/// A miss has no pantry index and a score of 0; its match type carries no
/// meaning, so check [`IngredientMatch::is_match`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientMatch {
    pub pantry_index: Option<usize>,
    pub match_type: IngredientMatchType,
    pub score: f64,
}

impl IngredientMatch {
    fn miss() -> Self {
        Self {
            pantry_index: None,
            match_type: IngredientMatchType::Exact,
            score: 0.0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.pantry_index.is_some() && self.score > 0.0
    }
}

/// Find the best pantry item for an ingredient name.
pub fn match_ingredient(
    name: &str,
    pantry: &[IngredientOnHand],
    settings: &PlannerSettings,
) -> IngredientMatch {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return IngredientMatch::miss();
    }

    let available: Vec<(usize, String)> = pantry
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_available())
        .map(|(idx, item)| (idx, normalize(&item.name)))
        .filter(|(_, normalized)| !normalized.is_empty())
        .collect();

    if let Some((idx, _)) = available.iter().find(|(_, have)| *have == wanted) {
        return IngredientMatch {
            pantry_index: Some(*idx),
            match_type: IngredientMatchType::Exact,
            score: settings.exact_score,
        };
    }

    if let Some((idx, _)) = available
        .iter()
        .find(|(_, have)| is_word_prefix(&wanted, have))
    {
        return IngredientMatch {
            pantry_index: Some(*idx),
            match_type: IngredientMatchType::Partial,
            score: settings.partial_score,
        };
    }

    // Strictly greater keeps the earliest pantry item on ties.
    let mut best: Option<(usize, f64)> = None;
    for (idx, have) in &available {
        let sim = similarity(&wanted, have);
        if sim > settings.fuzzy_threshold && best.map_or(true, |(_, top)| sim > top) {
            best = Some((*idx, sim));
        }
    }

    match best {
        Some((idx, sim)) => IngredientMatch {
            pantry_index: Some(idx),
            match_type: IngredientMatchType::Fuzzy,
            score: sim * settings.fuzzy_weight,
        },
        None => IngredientMatch::miss(),
    }
}

/// Scale a recipe quantity from the recipe's yield to the target servings.
///
/// A recipe yield of zero is treated as one serving.
pub fn scale_quantity(quantity: f64, target_servings: u32, recipe_servings: u32) -> f64 {
    quantity * f64::from(target_servings) / f64::from(recipe_servings.max(1))
}

/// Whether the pantry item covers the (scaled) requirement.
///
/// Ingredients without a quantity ("salt to taste") only need to be present.
/// When the units cannot be compared, presence is taken as enough.
pub fn has_enough(
    on_hand: &IngredientOnHand,
    required: &RecipeIngredient,
    target_servings: u32,
    recipe_servings: u32,
) -> bool {
    if !on_hand.is_available() {
        return false;
    }
    let Some(quantity) = required.quantity else {
        return true;
    };
    let needed = scale_quantity(quantity, target_servings, recipe_servings);
    covers(on_hand, needed, required.unit.as_deref())
}
