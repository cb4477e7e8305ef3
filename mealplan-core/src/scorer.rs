//! Rate recipes by how much of them the pantry can cover.

use crate::matcher::{has_enough, match_ingredient, scale_quantity};
use crate::settings::PlannerSettings;
use crate::types::{Deduction, IngredientOnHand, MatchedIngredient, Recipe, RecipeMatchScore};

/// Score one recipe against the pantry.
///
/// Each non-optional ingredient that both matches a pantry item and is
/// available in sufficient quantity contributes its match score and a
/// deduction. Returns `None` when nothing contributes.
pub fn score_recipe(
    recipe: &Recipe,
    pantry: &[IngredientOnHand],
    target_servings: u32,
    settings: &PlannerSettings,
) -> Option<RecipeMatchScore> {
    let required: Vec<_> = recipe
        .ingredients
        .iter()
        .filter(|ingredient| !ingredient.is_optional)
        .collect();

    let mut total = 0.0;
    let mut matched_ingredients = Vec::new();
    let mut deductions = Vec::new();

    for ingredient in &required {
        let found = match_ingredient(&ingredient.name, pantry, settings);
        let Some(idx) = found.pantry_index.filter(|_| found.is_match()) else {
            continue;
        };
        let on_hand = &pantry[idx];
        if !has_enough(on_hand, ingredient, target_servings, recipe.servings) {
            continue;
        }

        total += found.score;
        matched_ingredients.push(MatchedIngredient {
            recipe_ingredient: ingredient.name.clone(),
            pantry_item_id: on_hand.id,
            pantry_item_name: on_hand.name.clone(),
            match_type: found.match_type,
            score: found.score,
        });
        if let Some(quantity) = ingredient.quantity {
            deductions.push(Deduction {
                ingredient_id: on_hand.id,
                quantity: scale_quantity(quantity, target_servings, recipe.servings),
                unit: ingredient.unit.clone(),
            });
        }
    }

    if matched_ingredients.is_empty() {
        return None;
    }

    Some(RecipeMatchScore {
        recipe_id: recipe.id,
        recipe_title: recipe.title.clone(),
        score: total / required.len().max(1) as f64,
        matched_ingredients,
        deductions,
    })
}

/// Score every recipe, best first.
///
/// Recipes the pantry cannot contribute to at all are left out. Equal scores
/// keep catalog order.
pub fn score_recipes(
    recipes: &[Recipe],
    pantry: &[IngredientOnHand],
    target_servings: u32,
    settings: &PlannerSettings,
) -> Vec<RecipeMatchScore> {
    let mut scores: Vec<RecipeMatchScore> = recipes
        .iter()
        .filter_map(|recipe| score_recipe(recipe, pantry, target_servings, settings))
        .collect();
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecipeIngredient;
    use uuid::Uuid;

    fn recipe(title: &str, ingredients: &[(&str, Option<f64>, Option<&str>, bool)]) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: title.to_string(),
            ingredients: ingredients
                .iter()
                .map(|(name, quantity, unit, is_optional)| RecipeIngredient {
                    name: name.to_string(),
                    quantity: *quantity,
                    unit: unit.map(str::to_string),
                    is_optional: *is_optional,
                })
                .collect(),
            tags: vec![],
            servings: 2,
            is_favorite: false,
        }
    }

    #[test]
    fn test_score_fraction_of_required() {
        let pantry = vec![IngredientOnHand::new("rice", 500.0, Some("g"))];
        let pilaf = recipe(
            "Pilaf",
            &[
                ("rice", Some(200.0), Some("g"), false),
                ("stock", Some(2.0), Some("cup"), false),
                ("parsley", None, None, true),
            ],
        );

        let score = score_recipe(&pilaf, &pantry, 2, &PlannerSettings::default()).unwrap();
        assert_eq!(score.score, 0.5);
        assert_eq!(score.matched_ingredients.len(), 1);
        assert_eq!(score.deductions.len(), 1);
        assert_eq!(score.deductions[0].quantity, 200.0);
        assert_eq!(score.deductions[0].ingredient_id, pantry[0].id);
    }

    #[test]
    fn test_insufficient_quantity_excluded() {
        let pantry = vec![IngredientOnHand::new("rice", 100.0, Some("g"))];
        let pilaf = recipe("Pilaf", &[("rice", Some(200.0), Some("g"), false)]);
        assert!(score_recipe(&pilaf, &pantry, 2, &PlannerSettings::default()).is_none());
    }

    #[test]
    fn test_deduction_scaled_to_target() {
        let pantry = vec![IngredientOnHand::new("rice", 1000.0, Some("g"))];
        let pilaf = recipe("Pilaf", &[("rice", Some(200.0), Some("g"), false)]);
        let score = score_recipe(&pilaf, &pantry, 4, &PlannerSettings::default()).unwrap();
        assert_eq!(score.deductions[0].quantity, 400.0);
    }

    #[test]
    fn test_untracked_quantity_has_no_deduction() {
        let pantry = vec![IngredientOnHand::new("salt", 1.0, None)];
        let eggs = recipe("Eggs", &[("salt", None, None, false)]);
        let score = score_recipe(&eggs, &pantry, 2, &PlannerSettings::default()).unwrap();
        assert_eq!(score.score, 1.0);
        assert!(score.deductions.is_empty());
    }

    #[test]
    fn test_only_optional_ingredients_excluded() {
        let pantry = vec![IngredientOnHand::new("parsley", 1.0, None)];
        let garnish = recipe("Garnish", &[("parsley", None, None, true)]);
        assert!(score_recipe(&garnish, &pantry, 2, &PlannerSettings::default()).is_none());
    }

    #[test]
    fn test_ranked_descending_stable() {
        let pantry = vec![
            IngredientOnHand::new("rice", 1000.0, Some("g")),
            IngredientOnHand::new("chicken breast", 1000.0, Some("g")),
        ];
        let half = recipe(
            "Half",
            &[("rice", Some(100.0), Some("g"), false), ("tofu", None, None, false)],
        );
        let full_a = recipe("Full A", &[("rice", Some(100.0), Some("g"), false)]);
        let nothing = recipe("Nothing", &[("tofu", None, None, false)]);
        let full_b = recipe("Full B", &[("rice", Some(50.0), Some("g"), false)]);
        let partial = recipe("Partial", &[("chicken", Some(100.0), Some("g"), false)]);

        let ranked = score_recipes(
            &[half, full_a, nothing, full_b, partial],
            &pantry,
            2,
            &PlannerSettings::default(),
        );
        let titles: Vec<&str> = ranked.iter().map(|s| s.recipe_title.as_str()).collect();
        assert_eq!(titles, vec!["Full A", "Full B", "Partial", "Half"]);
    }
}
