// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DietaryTag, Difficulty, FilterSpec, Nutrition, Pantry, Prediction, Recipe, ScoredRecipe,
    UserData, UserDataError, BASELINE_SERVINGS, MAX_RATING, MIN_RATING,
};
pub use requests::{ImageQuery, LabelsRequest, PantryTextRequest, RateRequest, RecommendRequest};
pub use responses::{
    CacheStats, ErrorResponse, FavoriteResponse, HealthResponse, PantryResponse, RecommendResponse,
    SuggestionsResponse,
};
