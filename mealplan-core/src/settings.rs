//! Planner tuning from environment variables.

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Score for a normalized-name exact match.
pub const DEFAULT_EXACT_SCORE: f64 = 1.0;

/// Score for a word-prefix match ("chicken" vs "chicken breast").
pub const DEFAULT_PARTIAL_SCORE: f64 = 0.8;

/// Minimum similarity for a fuzzy match to count.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Fuzzy matches score `similarity * DEFAULT_FUZZY_WEIGHT`.
pub const DEFAULT_FUZZY_WEIGHT: f64 = 0.6;

/// How many top-ranked reuse candidates to pick among.
pub const DEFAULT_REUSE_POOL_SIZE: usize = 3;

/// Default cap on alternative recipe suggestions.
pub const DEFAULT_ALTERNATIVES_LIMIT: usize = 10;

/// Display order for slots missing from the slot definitions.
pub const UNKNOWN_SLOT_ORDER: u32 = 999;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnvVar { name: String, value: String },
}

/// Tunable constants used by the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerSettings {
    pub exact_score: f64,
    pub partial_score: f64,
    pub fuzzy_threshold: f64,
    pub fuzzy_weight: f64,
    pub reuse_pool_size: usize,
    pub alternatives_limit: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            exact_score: DEFAULT_EXACT_SCORE,
            partial_score: DEFAULT_PARTIAL_SCORE,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            fuzzy_weight: DEFAULT_FUZZY_WEIGHT,
            reuse_pool_size: DEFAULT_REUSE_POOL_SIZE,
            alternatives_limit: DEFAULT_ALTERNATIVES_LIMIT,
        }
    }
}

impl PlannerSettings {
    /// Load settings from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `MEALPLAN_PARTIAL_SCORE`: word-prefix match score (default: 0.8)
    /// - `MEALPLAN_FUZZY_THRESHOLD`: minimum fuzzy similarity (default: 0.6)
    /// - `MEALPLAN_FUZZY_WEIGHT`: fuzzy score multiplier (default: 0.6)
    /// - `MEALPLAN_REUSE_POOL_SIZE`: reuse candidates to choose among (default: 3)
    /// - `MEALPLAN_ALTERNATIVES_LIMIT`: alternative suggestions (default: 10)
    pub fn from_env() -> Result<Self, SettingsError> {
        let defaults = Self::default();
        Ok(Self {
            exact_score: defaults.exact_score,
            partial_score: env_or("MEALPLAN_PARTIAL_SCORE", defaults.partial_score)?,
            fuzzy_threshold: env_or("MEALPLAN_FUZZY_THRESHOLD", defaults.fuzzy_threshold)?,
            fuzzy_weight: env_or("MEALPLAN_FUZZY_WEIGHT", defaults.fuzzy_weight)?,
            reuse_pool_size: env_or("MEALPLAN_REUSE_POOL_SIZE", defaults.reuse_pool_size)?
                .max(1),
            alternatives_limit: env_or(
                "MEALPLAN_ALTERNATIVES_LIMIT",
                defaults.alternatives_limit,
            )?,
        })
    }
}

/// Read and parse an optional environment variable.
fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, SettingsError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
            }),
        Err(_) => Ok(default),
    }
}
