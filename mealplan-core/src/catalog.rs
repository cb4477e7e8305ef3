//! Recipe catalog abstraction.
//!
//! The planner reads the full recipe list once per run through
//! [`RecipeCatalog`]. Storage lives with the caller; [`InMemoryCatalog`]
//! serves fixed data for tests and small tools.

use async_trait::async_trait;
use std::fmt;

use crate::error::CatalogError;
use crate::types::Recipe;

/// Source of the recipes a plan may draw from.
#[async_trait]
pub trait RecipeCatalog: Send + Sync + fmt::Debug {
    /// Every recipe available to the planner, in catalog order.
    async fn all_recipes(&self) -> Result<Vec<Recipe>, CatalogError>;
}

/// A catalog backed by a plain vector.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    recipes: Vec<Recipe>,
    /// When set, every fetch fails with this message.
    failure: Option<String>,
}

impl InMemoryCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            failure: None,
        }
    }

    /// A catalog whose fetches always fail as unavailable.
    pub fn failing(message: &str) -> Self {
        Self {
            recipes: Vec::new(),
            failure: Some(message.to_string()),
        }
    }

    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[async_trait]
impl RecipeCatalog for InMemoryCatalog {
    async fn all_recipes(&self) -> Result<Vec<Recipe>, CatalogError> {
        match &self.failure {
            Some(message) => Err(CatalogError::Unavailable(message.clone())),
            None => Ok(self.recipes.clone()),
        }
    }
}
