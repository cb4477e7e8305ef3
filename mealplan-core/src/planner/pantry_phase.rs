//! Ingredient-driven assignment: cook what is already in the pantry.

use tracing::debug;

use super::PlanRun;
use crate::random::{shuffle, RandomSource};
use crate::scorer::score_recipes;
use crate::selector::select_weighted;
use crate::types::{MealMatchType, Recipe, RecipeMatchScore};

/// Assign pantry-backed recipes to pending slots. Returns how many were placed.
///
/// Slots are visited in shuffled order so early dates get no systematic
/// advantage. At most `min(scored recipes, pending slots)` slots are tried,
/// and the phase stops as soon as the pantry runs dry.
pub(super) fn assign(run: &mut PlanRun<'_>, rng: &mut dyn RandomSource) -> usize {
    if run.pantry.is_depleted() {
        debug!("Pantry is empty, skipping ingredient phase");
        return 0;
    }

    let scored = score_recipes(
        run.recipes,
        run.pantry.items(),
        run.config.default_servings,
        run.settings,
    );
    if scored.is_empty() {
        return 0;
    }

    let mut order = run.pending.clone();
    shuffle(&mut order, rng);
    let attempts = scored.len().min(order.len());

    let mut assigned = 0;
    for slot in order.into_iter().take(attempts) {
        if run.pantry.is_depleted() {
            debug!("Pantry depleted, ending ingredient phase");
            break;
        }

        let cookable: Vec<(&RecipeMatchScore, &Recipe)> = scored
            .iter()
            .filter(|score| !run.used.contains(&score.recipe_id))
            .filter(|score| run.pantry.can_cover(&score.deductions))
            .filter_map(|score| run.recipe(score.recipe_id).map(|recipe| (score, recipe)))
            .collect();
        if cookable.is_empty() {
            continue;
        }

        let day_tags = run.day_rule_tags(slot.weekday);
        let all: Vec<&Recipe> = cookable.iter().map(|(_, recipe)| *recipe).collect();
        let preferred: Vec<&Recipe> = all
            .iter()
            .copied()
            .filter(|recipe| recipe.has_any_tag(&day_tags))
            .collect();
        let pool = if preferred.is_empty() { &all } else { &preferred };

        let Some(recipe) = select_weighted(pool, run.config.favorites_weight, rng) else {
            continue;
        };
        let Some((score, _)) = cookable.iter().find(|(_, r)| r.id == recipe.id) else {
            continue;
        };

        run.pantry.apply(&score.deductions);

        let mut names: Vec<String> = Vec::new();
        for matched in &score.matched_ingredients {
            if !names.contains(&matched.pantry_item_name) {
                names.push(matched.pantry_item_name.clone());
            }
        }

        debug!(
            recipe = %recipe.title,
            date = %slot.date,
            slot = %slot.slot_id,
            score = score.score,
            "Assigned from pantry"
        );
        run.propose(&slot, recipe, MealMatchType::Ingredient, Some(names), None);
        assigned += 1;
    }

    assigned
}
