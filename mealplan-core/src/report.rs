//! Plan summaries: coverage counts, warnings, and final meal ordering.

use crate::slots::slot_order;
use crate::types::{MatchTypeBreakdown, MealMatchType, PlanCoverage, ProposedMeal, SlotDefinition};

/// Warnings for slots left empty and for plans that must repeat recipes.
///
/// An empty catalog only gets the "Could not fill" warning; the repeat
/// warning needs at least one recipe to repeat.
pub fn plan_warnings(total_slots: usize, filled_slots: usize, recipe_count: usize) -> Vec<String> {
    let mut warnings = Vec::new();

    if filled_slots < total_slots {
        warnings.push(format!(
            "Could not fill {} of {} meal slots: no recipes available",
            total_slots - filled_slots,
            total_slots
        ));
    }
    if recipe_count > 0 && total_slots > recipe_count {
        warnings.push(format!(
            "Only {recipe_count} recipes available for {total_slots} meal slots; some recipes will repeat"
        ));
    }

    warnings
}

pub fn coverage(meals: &[ProposedMeal], total_slots: usize) -> PlanCoverage {
    let mut by_match_type = MatchTypeBreakdown::default();
    for meal in meals {
        match meal.match_type {
            MealMatchType::Ingredient => by_match_type.ingredient += 1,
            MealMatchType::Tag => by_match_type.tag += 1,
            MealMatchType::Fallback => by_match_type.fallback += 1,
        }
    }

    PlanCoverage {
        total_slots,
        filled_slots: meals.len(),
        by_match_type,
    }
}

/// Order by date, then by the slot's display order.
pub fn sort_meals(meals: &mut [ProposedMeal], definitions: &[SlotDefinition]) {
    meals.sort_by_key(|meal| (meal.date, slot_order(&meal.slot_id, definitions)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn meal(date: &str, slot_id: &str, match_type: MealMatchType) -> ProposedMeal {
        ProposedMeal {
            id: Uuid::new_v4(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            slot_id: slot_id.to_string(),
            slot_name: slot_id.to_string(),
            recipe_id: Uuid::new_v4(),
            recipe_title: "Recipe".to_string(),
            servings: 2,
            match_type,
            matched_ingredients: None,
            matched_tags: None,
            is_rejected: false,
            is_locked: false,
        }
    }

    fn definitions() -> Vec<SlotDefinition> {
        vec![
            SlotDefinition {
                id: "dinner".to_string(),
                name: "Dinner".to_string(),
                order: 2,
            },
            SlotDefinition {
                id: "lunch".to_string(),
                name: "Lunch".to_string(),
                order: 1,
            },
        ]
    }

    #[test]
    fn test_no_warnings_when_covered() {
        assert!(plan_warnings(5, 5, 10).is_empty());
        assert!(plan_warnings(0, 0, 0).is_empty());
    }

    #[test]
    fn test_unfilled_warning() {
        let warnings = plan_warnings(7, 0, 0);
        assert_eq!(
            warnings,
            vec!["Could not fill 7 of 7 meal slots: no recipes available".to_string()]
        );
    }

    #[test]
    fn test_reuse_warning() {
        let warnings = plan_warnings(7, 7, 3);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0],
            "Only 3 recipes available for 7 meal slots; some recipes will repeat"
        );
    }

    #[test]
    fn test_coverage_counts() {
        let meals = vec![
            meal("2024-06-03", "dinner", MealMatchType::Ingredient),
            meal("2024-06-04", "dinner", MealMatchType::Tag),
            meal("2024-06-05", "dinner", MealMatchType::Fallback),
            meal("2024-06-06", "dinner", MealMatchType::Fallback),
        ];
        let coverage = coverage(&meals, 5);
        assert_eq!(coverage.total_slots, 5);
        assert_eq!(coverage.filled_slots, 4);
        assert_eq!(
            coverage.by_match_type,
            MatchTypeBreakdown {
                ingredient: 1,
                tag: 1,
                fallback: 2,
            }
        );
    }

    #[test]
    fn test_sort_by_date_then_slot_order() {
        let mut meals = vec![
            meal("2024-06-04", "lunch", MealMatchType::Fallback),
            meal("2024-06-03", "snack", MealMatchType::Fallback),
            meal("2024-06-03", "dinner", MealMatchType::Fallback),
            meal("2024-06-03", "lunch", MealMatchType::Fallback),
        ];
        sort_meals(&mut meals, &definitions());

        let order: Vec<(String, &str)> = meals
            .iter()
            .map(|m| (m.date.to_string(), m.slot_id.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2024-06-03".to_string(), "lunch"),
                ("2024-06-03".to_string(), "dinner"),
                ("2024-06-03".to_string(), "snack"),
                ("2024-06-04".to_string(), "lunch"),
            ]
        );
    }
}
