//! Fallback assignment: any unused recipe first, then spaced-out reuse.

use tracing::debug;

use super::PlanRun;
use crate::random::RandomSource;
use crate::reuse::ReuseTracker;
use crate::selector::select_weighted;
use crate::types::MealMatchType;

/// Fill every remaining slot if the catalog has any recipes at all.
pub(super) fn assign(run: &mut PlanRun<'_>, rng: &mut dyn RandomSource) -> usize {
    let mut tracker = ReuseTracker::seeded_from(&run.meals);
    let weight = run.config.favorites_weight;
    let mut assigned = 0;

    for slot in run.pending.clone() {
        let unused = run.unused_recipes();
        let recipe = if unused.is_empty() {
            let day_tags = run.day_rule_tags(slot.weekday);
            tracker.pick_reuse(
                run.recipes,
                &day_tags,
                weight,
                run.settings.reuse_pool_size,
                rng,
            )
        } else {
            select_weighted(&unused, weight, rng)
        };

        let Some(recipe) = recipe else {
            debug!(date = %slot.date, slot = %slot.slot_id, "No recipe available for slot");
            continue;
        };

        tracker.record(recipe.id);
        debug!(
            recipe = %recipe.title,
            date = %slot.date,
            slot = %slot.slot_id,
            reused = unused.is_empty(),
            "Assigned fallback"
        );
        run.propose(&slot, recipe, MealMatchType::Fallback, None, None);
        assigned += 1;
    }

    assigned
}
