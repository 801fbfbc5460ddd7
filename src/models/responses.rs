use serde::{Deserialize, Serialize};
use crate::core::CuisineAffinity;
use crate::models::domain::{Pantry, Recipe, ScoredRecipe, UserData};

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub recipes: Vec<ScoredRecipe>,
    pub total_results: usize,
    pub servings: u32,
}

/// Response for the suggestions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub recipes: Vec<Recipe>,
    pub cuisines: Vec<CuisineAffinity>,
}

/// Pantry after a merge, with the ingredients the merge added
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryResponse {
    pub pantry: Pantry,
    pub recognized: Vec<String>,
}

/// Favorite toggle response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub recipe_id: u32,
    pub favorite: bool,
    pub data: UserData,
}

/// Recommendation cache statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub recipes: usize,
    /// Absent when caching is disabled
    pub cache: Option<CacheStats>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
