//! Random recipe selection biased toward favorites.

use crate::random::{pick_uniform, RandomSource};
use crate::types::Recipe;

/// Pick one candidate, favoring favorites with probability `weight`%.
///
/// - no favorites: uniform over everything
/// - weight 100, or only favorites: uniform over favorites
/// - weight 0: uniform over non-favorites
/// - otherwise a single draw in `[0, 100)` decides which group to pick from
pub fn select_weighted<'a>(
    candidates: &[&'a Recipe],
    favorites_weight: u8,
    rng: &mut dyn RandomSource,
) -> Option<&'a Recipe> {
    if candidates.is_empty() {
        return None;
    }

    let (favorites, others): (Vec<&'a Recipe>, Vec<&'a Recipe>) = candidates
        .iter()
        .copied()
        .partition(|recipe| recipe.is_favorite);

    if favorites.is_empty() {
        return pick_uniform(candidates, rng).copied();
    }
    if favorites_weight >= 100 || others.is_empty() {
        return pick_uniform(&favorites, rng).copied();
    }
    if favorites_weight == 0 {
        return pick_uniform(&others, rng).copied();
    }

    let roll = rng.next_f64() * 100.0;
    if roll < f64::from(favorites_weight) {
        pick_uniform(&favorites, rng).copied()
    } else {
        pick_uniform(&others, rng).copied()
    }
}
