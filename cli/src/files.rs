//! JSON files consumed by the CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use mealplan_core::{
    CatalogError, DayTagRule, MealPlanConfig, Recipe, RecipeCatalog, SlotDefinition, TagNames,
};
use serde::Deserialize;

/// A recipe catalog stored as a JSON array of recipes.
///
/// The file is read on every fetch, so edits show up on the next run.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecipeCatalog for JsonFileCatalog {
    async fn all_recipes(&self) -> Result<Vec<Recipe>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        let recipes: Vec<Recipe> = serde_json::from_str(&content)
            .map_err(|e| CatalogError::Malformed(format!("{}: {}", self.path.display(), e)))?;
        tracing::debug!(count = recipes.len(), path = %self.path.display(), "Loaded recipe catalog");
        Ok(recipes)
    }
}

/// Everything `generate` needs besides the catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub config: MealPlanConfig,
    #[serde(default)]
    pub meal_slots: Vec<SlotDefinition>,
    #[serde(default)]
    pub tag_names: TagNames,
}

pub async fn read_request(path: &Path) -> Result<PlanRequest> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read plan request {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse plan request {}", path.display()))
}

pub async fn read_rules(path: &Path) -> Result<Vec<DayTagRule>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read tag rules {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse tag rules {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mealplan-{}.json", Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_catalog_reads_recipes() {
        let path = temp_file(
            r#"[{"id": "8a1f0c2e-3b4d-4e5f-8a6b-7c8d9e0f1a2b", "title": "Ratatouille", "servings": 4, "tags": ["veg"]}]"#,
        );
        let recipes = JsonFileCatalog::new(&path).all_recipes().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Ratatouille");
        assert!(recipes[0].ingredients.is_empty());
        assert!(!recipes[0].is_favorite);
    }

    #[tokio::test]
    async fn test_missing_catalog_is_unavailable() {
        let path = std::env::temp_dir().join(format!("mealplan-missing-{}.json", Uuid::new_v4()));
        let err = JsonFileCatalog::new(path).all_recipes().await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_bad_json_is_malformed() {
        let path = temp_file("{not json");
        let err = JsonFileCatalog::new(&path).all_recipes().await.unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_request_defaults() {
        let path = temp_file(
            r#"{"config": {"startDate": "2024-06-03", "endDate": "2024-06-09", "slotIds": ["dinner"], "defaultServings": 2}}"#,
        );
        let request = read_request(&path).await.unwrap();
        std::fs::remove_file(&path).ok();

        assert!(request.meal_slots.is_empty());
        assert!(request.tag_names.is_empty());
        assert_eq!(request.config.favorites_weight, 0);
        assert!(request.config.pantry.is_empty());
    }
}
