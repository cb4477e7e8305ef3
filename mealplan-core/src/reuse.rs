//! Spacing heuristic for reusing recipes once every recipe has been placed.

use std::collections::HashMap;

use uuid::Uuid;

use crate::random::{pick_uniform, RandomSource};
use crate::types::{ProposedMeal, Recipe};

const DISTANCE_WEIGHT: f64 = 10.0;
const DAY_RULE_BONUS: f64 = 5.0;
const FAVORITE_BONUS: f64 = 10.0;

/// Remembers the slot index at which each recipe was last placed.
#[derive(Debug, Clone, Default)]
pub struct ReuseTracker {
    last_used: HashMap<Uuid, usize>,
    current_index: usize,
}

impl ReuseTracker {
    /// Start tracking after the meals already placed, indexed by position.
    pub fn seeded_from(meals: &[ProposedMeal]) -> Self {
        let last_used = meals
            .iter()
            .enumerate()
            .map(|(idx, meal)| (meal.recipe_id, idx))
            .collect();
        Self {
            last_used,
            current_index: meals.len(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn last_used(&self, recipe_id: Uuid) -> Option<usize> {
        self.last_used.get(&recipe_id).copied()
    }

    /// Record a placement at the current index and advance.
    pub fn record(&mut self, recipe_id: Uuid) {
        self.last_used.insert(recipe_id, self.current_index);
        self.current_index += 1;
    }

    /// Higher is a better reuse target.
    ///
    /// Never-used recipes get a distance of `current + recipe_count`, which
    /// beats any recipe that has been placed.
    pub fn reuse_score(
        &self,
        recipe: &Recipe,
        recipe_count: usize,
        matches_day_rule: bool,
        favorites_weight: u8,
    ) -> f64 {
        let distance = match self.last_used(recipe.id) {
            Some(last) => self.current_index.saturating_sub(last),
            None => self.current_index + recipe_count,
        };

        let mut score = distance as f64 * DISTANCE_WEIGHT;
        if matches_day_rule {
            score += DAY_RULE_BONUS;
        }
        if recipe.is_favorite {
            score += f64::from(favorites_weight) / 100.0 * FAVORITE_BONUS;
        }
        score
    }

    /// Choose uniformly among the `pool_size` best-spaced recipes.
    pub fn pick_reuse<'a>(
        &self,
        recipes: &'a [Recipe],
        day_rule_tags: &[&str],
        favorites_weight: u8,
        pool_size: usize,
        rng: &mut dyn RandomSource,
    ) -> Option<&'a Recipe> {
        let mut ranked: Vec<(&'a Recipe, f64)> = recipes
            .iter()
            .map(|recipe| {
                let matches = recipe.has_any_tag(day_rule_tags);
                let score = self.reuse_score(recipe, recipes.len(), matches, favorites_weight);
                (recipe, score)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(pool_size.max(1));

        pick_uniform(&ranked, rng).map(|(recipe, _)| *recipe)
    }
}
