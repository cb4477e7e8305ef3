//! Tag-driven assignment from per-weekday rules.

use tracing::debug;

use super::PlanRun;
use crate::random::RandomSource;
use crate::selector::select_weighted;
use crate::types::{DayTagRule, MealMatchType, Recipe, TagPriority};

/// Fill pending slots with unused recipes matching the weekday's tag rules.
///
/// Required rules are tried before preferred ones; the first priority with
/// any matching recipe decides the slot. Slots with no rules or no matches
/// stay pending.
pub(super) fn assign(run: &mut PlanRun<'_>, rng: &mut dyn RandomSource) -> usize {
    let config = run.config;
    let mut assigned = 0;

    for slot in run.pending.clone() {
        for priority in [TagPriority::Required, TagPriority::Preferred] {
            let tags =
                DayTagRule::weekday_tags(&config.day_tag_rules, slot.weekday, Some(priority));
            if tags.is_empty() {
                continue;
            }

            let candidates: Vec<&Recipe> = run
                .unused_recipes()
                .into_iter()
                .filter(|recipe| recipe.has_any_tag(&tags))
                .collect();
            let Some(recipe) = select_weighted(&candidates, run.config.favorites_weight, rng)
            else {
                continue;
            };

            let matched_tags: Vec<String> = recipe
                .tags
                .iter()
                .filter(|tag| tags.contains(&tag.as_str()))
                .map(|tag| run.tag_name(tag))
                .collect();

            debug!(
                recipe = %recipe.title,
                date = %slot.date,
                slot = %slot.slot_id,
                ?priority,
                "Assigned from tag rule"
            );
            run.propose(&slot, recipe, MealMatchType::Tag, None, Some(matched_tags));
            assigned += 1;
            break;
        }
    }

    assigned
}

#[cfg(test)]
mod tests {
    use super::super::{PlanRun, TagNames};
    use super::*;
    use crate::random::ScriptedRandom;
    use crate::settings::PlannerSettings;
    use crate::slots::generate_slots;
    use crate::types::MealPlanConfig;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn recipe(title: &str, tags: &[&str]) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: title.to_string(),
            ingredients: vec![],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            servings: 2,
            is_favorite: false,
        }
    }

    fn rule(weekday: u8, tags: &[&str], priority: TagPriority) -> DayTagRule {
        DayTagRule {
            weekday,
            tag_ids: tags.iter().map(|t| t.to_string()).collect(),
            priority,
        }
    }

    /// Monday and Tuesday dinners.
    fn config(rules: Vec<DayTagRule>) -> MealPlanConfig {
        MealPlanConfig {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
            slot_ids: vec!["dinner".to_string()],
            skip_weekdays: vec![],
            pantry: vec![],
            day_tag_rules: rules,
            default_servings: 2,
            favorites_weight: 0,
        }
    }

    fn run_phase(recipes: &[Recipe], config: &MealPlanConfig) -> (Vec<String>, usize) {
        let settings = PlannerSettings::default();
        let tag_names = TagNames::new();
        let slots = generate_slots(
            config.start_date,
            config.end_date,
            &config.slot_ids,
            &config.skip_weekdays,
            &[],
        );
        let mut run = PlanRun::new(recipes, config, &tag_names, &settings, slots);
        let mut rng = ScriptedRandom::constant(0.0);
        assign(&mut run, &mut rng);
        let titles = run.meals.iter().map(|m| m.recipe_title.clone()).collect();
        (titles, run.pending.len())
    }

    #[test]
    fn test_required_before_preferred() {
        let recipes = vec![recipe("Burger", &["grill"]), recipe("Salmon", &["fish"])];
        let config = config(vec![
            rule(1, &["grill"], TagPriority::Preferred),
            rule(1, &["fish"], TagPriority::Required),
        ]);

        let (titles, pending) = run_phase(&recipes, &config);
        assert_eq!(titles, vec!["Salmon"]);
        // Tuesday has no rules
        assert_eq!(pending, 1);
    }

    #[test]
    fn test_falls_back_to_preferred() {
        let recipes = vec![recipe("Burger", &["grill"])];
        let config = config(vec![
            rule(1, &["fish"], TagPriority::Required),
            rule(1, &["grill"], TagPriority::Preferred),
        ]);

        let (titles, _) = run_phase(&recipes, &config);
        assert_eq!(titles, vec!["Burger"]);
    }

    #[test]
    fn test_recipe_not_reused_across_days() {
        let recipes = vec![recipe("Pizza", &["fun"])];
        let config = config(vec![
            rule(1, &["fun"], TagPriority::Required),
            rule(2, &["fun"], TagPriority::Required),
        ]);

        let (titles, pending) = run_phase(&recipes, &config);
        assert_eq!(titles, vec!["Pizza"]);
        assert_eq!(pending, 1);
    }

    #[test]
    fn test_no_matching_recipe_leaves_slot() {
        let recipes = vec![recipe("Soup", &["cozy"])];
        let config = config(vec![rule(1, &["fish"], TagPriority::Required)]);

        let (titles, pending) = run_phase(&recipes, &config);
        assert!(titles.is_empty());
        assert_eq!(pending, 2);
    }
}
