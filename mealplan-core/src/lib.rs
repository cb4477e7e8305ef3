pub mod alternatives;
pub mod catalog;
pub mod error;
pub mod matcher;
pub mod pantry;
pub mod planner;
pub mod random;
pub mod report;
pub mod reuse;
pub mod scorer;
pub mod selector;
pub mod settings;
pub mod slots;
pub mod text;
pub mod types;

pub use alternatives::find_alternative_recipes;
pub use catalog::{InMemoryCatalog, RecipeCatalog};
pub use error::{CatalogError, PlanError};
pub use matcher::{match_ingredient, IngredientMatch};
pub use pantry::Pantry;
pub use planner::{plan_meals, validate_config, MealPlanner, TagNames};
pub use random::{RandomSource, RngSource, ScriptedRandom};
pub use scorer::{score_recipe, score_recipes};
pub use settings::{PlannerSettings, SettingsError};
pub use slots::{generate_slots, weekday_index};
pub use types::{
    DayTagRule, Deduction, GeneratedMealPlan, IngredientMatchType, IngredientOnHand,
    IngredientUsage, MatchTypeBreakdown, MatchedIngredient, MealMatchType, MealPlanConfig,
    PlanCoverage, ProposedMeal, Recipe, RecipeIngredient, RecipeMatchScore, SlotDefinition,
    SlotToFill, TagPriority,
};
