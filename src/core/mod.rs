// Core algorithm exports
pub mod filters;
pub mod labels;
pub mod recommender;
pub mod scaling;
pub mod scoring;
pub mod suggestions;

pub use filters::{is_disqualified, matches_difficulty, satisfies_dietary, within_time};
pub use labels::{dedupe_top_n, map_label, Labelled};
pub use recommender::{RecommendResult, Recommender, DEFAULT_RESULT_LIMIT};
pub use scaling::{format_quantity, scale_ingredients, scale_line, serving_factor, ScalingError};
pub use scoring::{count_pantry_matches, score_recipe, DISQUALIFIED};
pub use suggestions::{rank_cuisines, suggest, CuisineAffinity, SuggestionResult, DEFAULT_SUGGESTION_LIMIT};
