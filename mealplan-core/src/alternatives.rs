//! Replacement suggestions for a single proposed meal.

use uuid::Uuid;

use crate::types::{DayTagRule, Recipe};

/// Recipes that could stand in for `current_recipe_id` on `weekday`.
///
/// The current recipe and everything in `used_ids` are excluded. Recipes
/// carrying any tag from the weekday's rules come first; both groups keep
/// catalog order, so the result is fully deterministic.
pub fn find_alternative_recipes<'a>(
    recipes: &'a [Recipe],
    current_recipe_id: Uuid,
    weekday: u8,
    rules: &[DayTagRule],
    used_ids: &[Uuid],
    limit: usize,
) -> Vec<&'a Recipe> {
    let day_tags = DayTagRule::weekday_tags(rules, weekday, None);

    let (mut tagged, untagged): (Vec<&'a Recipe>, Vec<&'a Recipe>) = recipes
        .iter()
        .filter(|recipe| recipe.id != current_recipe_id && !used_ids.contains(&recipe.id))
        .partition(|recipe| recipe.has_any_tag(&day_tags));

    tagged.extend(untagged);
    tagged.truncate(limit);
    tagged
}
