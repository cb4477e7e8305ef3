use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a day tag rule must be honored or is only a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPriority {
    Required,
    Preferred,
}

/// Weekday-scoped recipe tag preference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTagRule {
    /// 0 = Sunday through 6 = Saturday
    pub weekday: u8,
    pub tag_ids: Vec<String>,
    pub priority: TagPriority,
}

impl DayTagRule {
    /// Tags named by the rules for `weekday`, in rule order.
    ///
    /// With a priority, only rules of that priority contribute.
    pub fn weekday_tags(
        rules: &[DayTagRule],
        weekday: u8,
        priority: Option<TagPriority>,
    ) -> Vec<&str> {
        rules
            .iter()
            .filter(|rule| rule.weekday == weekday)
            .filter(|rule| priority.map_or(true, |p| rule.priority == p))
            .flat_map(|rule| rule.tag_ids.iter().map(String::as_str))
            .collect()
    }
}

/// An ingredient available in the pantry at planning time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientOnHand {
    pub id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: Option<String>,
    /// Quantity at the start of the run, kept for usage reporting
    #[serde(default)]
    pub original_quantity: f64,
}

impl IngredientOnHand {
    pub fn new(name: impl Into<String>, quantity: f64, unit: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            unit: unit.map(str::to_string),
            original_quantity: quantity,
        }
    }

    pub fn is_available(&self) -> bool {
        self.quantity > 0.0
    }
}

/// Everything a single generation run needs besides the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanConfig {
    pub start_date: NaiveDate,
    /// Inclusive
    pub end_date: NaiveDate,
    /// Selected slot identifiers, in the order slots are generated per day
    pub slot_ids: Vec<String>,
    #[serde(default)]
    pub skip_weekdays: Vec<u8>,
    #[serde(default)]
    pub pantry: Vec<IngredientOnHand>,
    #[serde(default)]
    pub day_tag_rules: Vec<DayTagRule>,
    pub default_servings: u32,
    /// 0-100 bias toward favorite recipes
    #[serde(default)]
    pub favorites_weight: u8,
}

/// A meal slot as configured by the surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotDefinition {
    pub id: String,
    pub name: String,
    pub order: u32,
}

/// One unfilled (date, slot) obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotToFill {
    pub date: NaiveDate,
    pub slot_id: String,
    pub slot_name: String,
    pub weekday: u8,
}

/// A recipe ingredient line as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub name: String,
    /// None for "to taste" style ingredients
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    #[serde(default)]
    pub is_optional: bool,
}

/// A catalog recipe, as seen by the planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub servings: u32,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Recipe {
    pub fn has_any_tag(&self, tag_ids: &[&str]) -> bool {
        self.tags.iter().any(|tag| tag_ids.contains(&tag.as_str()))
    }
}

/// How a recipe ingredient was resolved against the pantry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientMatchType {
    Exact,
    Partial,
    Fuzzy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedIngredient {
    pub recipe_ingredient: String,
    pub pantry_item_id: Uuid,
    pub pantry_item_name: String,
    pub match_type: IngredientMatchType,
    pub score: f64,
}

/// Quantity to take out of the pantry if a recipe is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deduction {
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: Option<String>,
}

/// Pantry coverage of one recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatchScore {
    pub recipe_id: Uuid,
    pub recipe_title: String,
    /// 0-1 fraction of non-optional ingredients covered, weighted by match quality
    pub score: f64,
    pub matched_ingredients: Vec<MatchedIngredient>,
    pub deductions: Vec<Deduction>,
}

/// How a proposed meal got its recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealMatchType {
    Ingredient,
    Tag,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedMeal {
    pub id: Uuid,
    pub date: NaiveDate,
    pub slot_id: String,
    pub slot_name: String,
    pub recipe_id: Uuid,
    pub recipe_title: String,
    pub servings: u32,
    pub match_type: MealMatchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_tags: Option<Vec<String>>,
    /// Reserved for the review UI; the planner always emits false
    #[serde(default)]
    pub is_rejected: bool,
    /// Reserved for the review UI; the planner always emits false
    #[serde(default)]
    pub is_locked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTypeBreakdown {
    pub ingredient: usize,
    pub tag: usize,
    pub fallback: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCoverage {
    pub total_slots: usize,
    pub filled_slots: usize,
    pub by_match_type: MatchTypeBreakdown,
}

/// Per pantry item diff between the input and the end of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientUsage {
    pub ingredient_id: Uuid,
    pub name: String,
    pub unit: Option<String>,
    pub original_quantity: f64,
    pub used_quantity: f64,
    pub remaining_quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMealPlan {
    pub proposed_meals: Vec<ProposedMeal>,
    pub ingredient_usage: Vec<IngredientUsage>,
    pub warnings: Vec<String>,
    pub coverage: PlanCoverage,
}
