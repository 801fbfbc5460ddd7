//! Recipe Algo - pantry-driven recipe recommendation service
//!
//! This library provides the recommendation engine: ingredient label
//! mapping, serving-size rescaling, recipe scoring and ranking, and
//! rating-driven suggestions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{dedupe_top_n, map_label, scale_ingredients, score_recipe, suggest, Recommender};
pub use models::{FilterSpec, Pantry, Recipe, ScoredRecipe, UserData};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(map_label("bell pepper"), Some("bell peppers"));
        assert_eq!(scale_ingredients(&["1 egg"], 2.0).unwrap(), vec!["2 egg"]);
    }
}
