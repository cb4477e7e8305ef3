//! Meal plan generation.
//!
//! A run expands the configuration into slot obligations and fills them in
//! three greedy phases, each working on whatever the previous phase left:
//!
//! 1. `pantry_phase`: recipes the pantry can cook, deducting as it goes
//! 2. `tag_phase`: recipes carrying the weekday's required, then preferred, tags
//! 3. `fallback_phase`: any unused recipe, then spaced-out reuse
//!
//! Nothing is revisited once placed, so the result is a heuristic plan rather
//! than an optimal one.

mod fallback_phase;
mod pantry_phase;
mod tag_phase;

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::alternatives::find_alternative_recipes;
use crate::catalog::RecipeCatalog;
use crate::error::PlanError;
use crate::pantry::Pantry;
use crate::random::RandomSource;
use crate::report::{coverage, plan_warnings, sort_meals};
use crate::settings::PlannerSettings;
use crate::slots::generate_slots;
use crate::types::{
    DayTagRule, GeneratedMealPlan, MealMatchType, MealPlanConfig, ProposedMeal, Recipe,
    SlotDefinition, SlotToFill,
};

/// Tag id to display name lookup.
pub type TagNames = HashMap<String, String>;

/// Generates meal plans against a recipe catalog.
#[derive(Debug)]
pub struct MealPlanner {
    catalog: Box<dyn RecipeCatalog>,
    settings: PlannerSettings,
}

impl MealPlanner {
    pub fn new(catalog: Box<dyn RecipeCatalog>) -> Self {
        Self {
            catalog,
            settings: PlannerSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: PlannerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Fetch the catalog once and plan against it.
    ///
    /// Catalog failures are returned as-is; everything after the fetch is
    /// synchronous.
    pub async fn generate(
        &self,
        config: &MealPlanConfig,
        meal_slots: &[SlotDefinition],
        tag_names: &TagNames,
        rng: &mut dyn RandomSource,
    ) -> Result<GeneratedMealPlan, PlanError> {
        validate_config(config)?;
        let recipes = self.catalog.all_recipes().await?;
        plan_meals(&recipes, config, meal_slots, tag_names, &self.settings, rng)
    }

    /// Catalog recipes that could replace `current_recipe_id` in a slot.
    ///
    /// `limit` defaults to the configured alternatives limit.
    pub async fn alternatives(
        &self,
        current_recipe_id: Uuid,
        weekday: u8,
        rules: &[DayTagRule],
        used_ids: &[Uuid],
        limit: Option<usize>,
    ) -> Result<Vec<Recipe>, PlanError> {
        let recipes = self.catalog.all_recipes().await?;
        let limit = limit.unwrap_or(self.settings.alternatives_limit);
        Ok(
            find_alternative_recipes(&recipes, current_recipe_id, weekday, rules, used_ids, limit)
                .into_iter()
                .cloned()
                .collect(),
        )
    }
}

/// Plan meals against an already-fetched catalog.
pub fn plan_meals(
    recipes: &[Recipe],
    config: &MealPlanConfig,
    meal_slots: &[SlotDefinition],
    tag_names: &TagNames,
    settings: &PlannerSettings,
    rng: &mut dyn RandomSource,
) -> Result<GeneratedMealPlan, PlanError> {
    validate_config(config)?;

    let obligations = generate_slots(
        config.start_date,
        config.end_date,
        &config.slot_ids,
        &config.skip_weekdays,
        meal_slots,
    );
    let total_slots = obligations.len();
    info!(
        total_slots,
        recipes = recipes.len(),
        pantry_items = config.pantry.len(),
        "Generating meal plan"
    );

    let mut run = PlanRun::new(recipes, config, tag_names, settings, obligations);

    let by_pantry = pantry_phase::assign(&mut run, rng);
    debug!(assigned = by_pantry, pending = run.pending.len(), "Pantry phase done");

    let by_tag = tag_phase::assign(&mut run, rng);
    debug!(assigned = by_tag, pending = run.pending.len(), "Tag phase done");

    let by_fallback = fallback_phase::assign(&mut run, rng);
    debug!(assigned = by_fallback, pending = run.pending.len(), "Fallback phase done");

    let PlanRun {
        mut meals, pantry, ..
    } = run;

    let warnings = plan_warnings(total_slots, meals.len(), recipes.len());
    for warning in &warnings {
        warn!("{}", warning);
    }

    sort_meals(&mut meals, meal_slots);
    let coverage = coverage(&meals, total_slots);
    info!(
        filled = coverage.filled_slots,
        total = coverage.total_slots,
        "Meal plan generated"
    );

    Ok(GeneratedMealPlan {
        proposed_meals: meals,
        ingredient_usage: pantry.usage(),
        warnings,
        coverage,
    })
}

/// Reject configurations that cannot describe a plan.
pub fn validate_config(config: &MealPlanConfig) -> Result<(), PlanError> {
    if config.end_date < config.start_date {
        return Err(PlanError::InvalidConfig(format!(
            "end date {} is before start date {}",
            config.end_date, config.start_date
        )));
    }
    if config.slot_ids.is_empty() {
        return Err(PlanError::InvalidConfig(
            "no meal slots selected".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for slot_id in &config.slot_ids {
        if !seen.insert(slot_id.as_str()) {
            return Err(PlanError::InvalidConfig(format!(
                "meal slot {slot_id:?} selected more than once"
            )));
        }
    }
    if config.favorites_weight > 100 {
        return Err(PlanError::InvalidConfig(format!(
            "favorites weight {} is above 100",
            config.favorites_weight
        )));
    }
    if config.default_servings == 0 {
        return Err(PlanError::InvalidConfig(
            "default servings must be at least 1".to_string(),
        ));
    }
    if let Some(day) = config.skip_weekdays.iter().find(|day| **day > 6) {
        return Err(PlanError::InvalidConfig(format!(
            "skipped weekday {day} is outside 0-6"
        )));
    }
    if let Some(rule) = config.day_tag_rules.iter().find(|rule| rule.weekday > 6) {
        return Err(PlanError::InvalidConfig(format!(
            "tag rule weekday {} is outside 0-6",
            rule.weekday
        )));
    }
    Ok(())
}

/// Mutable state shared by the phases of one run.
struct PlanRun<'a> {
    recipes: &'a [Recipe],
    config: &'a MealPlanConfig,
    tag_names: &'a TagNames,
    settings: &'a PlannerSettings,
    pantry: Pantry,
    pending: Vec<SlotToFill>,
    used: HashSet<Uuid>,
    meals: Vec<ProposedMeal>,
}

impl<'a> PlanRun<'a> {
    fn new(
        recipes: &'a [Recipe],
        config: &'a MealPlanConfig,
        tag_names: &'a TagNames,
        settings: &'a PlannerSettings,
        pending: Vec<SlotToFill>,
    ) -> Self {
        Self {
            recipes,
            config,
            tag_names,
            settings,
            pantry: Pantry::snapshot(&config.pantry),
            pending,
            used: HashSet::new(),
            meals: Vec::new(),
        }
    }

    fn recipe(&self, id: Uuid) -> Option<&'a Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    fn unused_recipes(&self) -> Vec<&'a Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| !self.used.contains(&recipe.id))
            .collect()
    }

    /// Every tag named by any rule for the weekday.
    fn day_rule_tags(&self, weekday: u8) -> Vec<&'a str> {
        let config: &'a MealPlanConfig = self.config;
        DayTagRule::weekday_tags(&config.day_tag_rules, weekday, None)
    }

    fn tag_name(&self, tag_id: &str) -> String {
        self.tag_names
            .get(tag_id)
            .cloned()
            .unwrap_or_else(|| tag_id.to_string())
    }

    /// Commit `recipe` to `slot` and drop the slot from the pending list.
    fn propose(
        &mut self,
        slot: &SlotToFill,
        recipe: &Recipe,
        match_type: MealMatchType,
        matched_ingredients: Option<Vec<String>>,
        matched_tags: Option<Vec<String>>,
    ) {
        if let Some(pos) = self.pending.iter().position(|pending| pending == slot) {
            self.pending.remove(pos);
        }
        self.used.insert(recipe.id);
        self.meals.push(ProposedMeal {
            id: Uuid::new_v4(),
            date: slot.date,
            slot_id: slot.slot_id.clone(),
            slot_name: slot.slot_name.clone(),
            recipe_id: recipe.id,
            recipe_title: recipe.title.clone(),
            servings: self.config.default_servings,
            match_type,
            matched_ingredients,
            matched_tags,
            is_rejected: false,
            is_locked: false,
        });
    }
}
