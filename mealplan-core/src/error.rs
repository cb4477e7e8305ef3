use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Recipe catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed recipe catalog: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid meal plan config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
