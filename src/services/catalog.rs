use crate::models::Recipe;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the recipe catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),

    #[error("Invalid recipe {id}: {reason}")]
    InvalidRecipe { id: u32, reason: String },
}

/// Static recipe catalog, loaded once at startup and never mutated
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    index: HashMap<u32, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and zero cooking times
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(recipes.len());

        for (position, recipe) in recipes.iter().enumerate() {
            if recipe.time == 0 {
                return Err(CatalogError::InvalidRecipe {
                    id: recipe.id,
                    reason: "time must be a positive number of minutes".to_string(),
                });
            }
            if index.insert(recipe.id, position).is_some() {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
        }

        Ok(Self { recipes, index })
    }

    /// Parse a catalog from a JSON array of recipes
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Load a catalog from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        let catalog = Self::from_json(&json)?;

        tracing::info!(
            "Loaded {} recipes from {}",
            catalog.len(),
            path.as_ref().display()
        );

        Ok(catalog)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.index.get(&id).map(|&position| &self.recipes[position])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
