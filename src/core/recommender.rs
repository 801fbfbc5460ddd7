use crate::core::{
    scaling::{scale_ingredients, serving_factor, ScalingError},
    scoring::{score_recipe, DISQUALIFIED},
};
use crate::models::{FilterSpec, Pantry, Recipe, ScoredRecipe, BASELINE_SERVINGS};

/// Default number of recipes on a result page
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Result of a recommendation run
#[derive(Debug)]
pub struct RecommendResult {
    pub recipes: Vec<ScoredRecipe>,
    /// Recipes that survived the hard filters, before truncation
    pub total_candidates: usize,
}

/// Recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Serving rescale of every recipe's ingredient lines
/// 2. Scoring with hard-filter disqualification
/// 3. Ranking by match count, then by shorter time
/// 4. Truncation to the result limit
#[derive(Debug, Clone)]
pub struct Recommender {
    limit: usize,
    baseline_servings: u32,
}

impl Recommender {
    pub fn new(limit: usize, baseline_servings: u32) -> Self {
        Self {
            limit,
            baseline_servings,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_RESULT_LIMIT, BASELINE_SERVINGS)
    }

    /// Rank catalog recipes for a pantry and filter set
    ///
    /// The catalog is never mutated; returned recipes are serving-adjusted
    /// copies. Fails only when `filters.servings` is zero.
    pub fn recommend(
        &self,
        catalog: &[Recipe],
        pantry: &Pantry,
        filters: &FilterSpec,
    ) -> Result<RecommendResult, ScalingError> {
        let factor = serving_factor(filters.servings, self.baseline_servings)?;

        let mut scored: Vec<ScoredRecipe> = Vec::with_capacity(catalog.len());
        for recipe in catalog {
            // Stage 1: serving-adjusted copy
            let mut adjusted = recipe.clone();
            adjusted.ingredients = scale_ingredients(&recipe.ingredients, factor)?;

            // Stage 2: score and drop disqualified recipes
            let score = score_recipe(
                &adjusted,
                pantry,
                &filters.dietary,
                filters.max_time,
                filters.difficulty,
            );
            if score == DISQUALIFIED {
                continue;
            }

            scored.push(ScoredRecipe {
                recipe: adjusted,
                match_count: u32::try_from(score).unwrap_or(0),
                servings: filters.servings,
            });
        }

        let total_candidates = scored.len();

        // Stage 3: match count descending, then time ascending; sort_by is
        // stable so remaining ties keep catalog order
        scored.sort_by(|a, b| {
            b.match_count
                .cmp(&a.match_count)
                .then_with(|| a.recipe.time.cmp(&b.recipe.time))
        });

        // Stage 4
        scored.truncate(self.limit);

        tracing::debug!(
            "Ranked {} of {} recipes ({} candidates, servings {})",
            scored.len(),
            catalog.len(),
            total_candidates,
            filters.servings
        );

        Ok(RecommendResult {
            recipes: scored,
            total_candidates,
        })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryTag, Difficulty, Nutrition};
    use std::collections::BTreeMap;

    fn create_recipe(id: u32, time: u32, ingredients: &[&str]) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {}", id),
            cuisine: "Italian".to_string(),
            difficulty: Difficulty::Easy,
            time,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            dietary: [DietaryTag::Vegetarian].into_iter().collect(),
            steps: vec![],
            nutrition: Nutrition::default(),
            substitutions: BTreeMap::new(),
        }
    }

    fn ids(result: &RecommendResult) -> Vec<u32> {
        result.recipes.iter().map(|r| r.recipe.id).collect()
    }

    #[test]
    fn test_ranked_by_match_count() {
        let recommender = Recommender::with_defaults();
        let catalog = vec![
            create_recipe(1, 10, &["1 onion"]),
            create_recipe(2, 30, &["2 tomatoes", "1 onion"]),
            create_recipe(3, 5, &["1 cup rice"]),
        ];
        let pantry: Pantry = ["tomato", "onion"].into_iter().collect();

        let result = recommender
            .recommend(&catalog, &pantry, &FilterSpec::default())
            .unwrap();

        assert_eq!(ids(&result), vec![2, 1, 3]);
        assert_eq!(result.recipes[0].match_count, 2);
        assert_eq!(result.recipes[2].match_count, 0);
    }

    #[test]
    fn test_ties_broken_by_time_then_catalog_order() {
        let recommender = Recommender::with_defaults();
        let catalog = vec![
            create_recipe(1, 40, &["1 onion"]),
            create_recipe(2, 20, &["1 onion"]),
            create_recipe(3, 20, &["2 onions"]),
        ];
        let pantry: Pantry = ["onion"].into_iter().collect();

        let result = recommender
            .recommend(&catalog, &pantry, &FilterSpec::default())
            .unwrap();

        assert_eq!(ids(&result), vec![2, 3, 1]);
    }

    #[test]
    fn test_disqualified_recipes_dropped() {
        let recommender = Recommender::with_defaults();
        let catalog = vec![
            create_recipe(1, 10, &["1 onion"]),
            create_recipe(2, 90, &["1 onion"]),
        ];
        let filters = FilterSpec {
            max_time: Some(45),
            ..FilterSpec::default()
        };

        let result = recommender.recommend(&catalog, &Pantry::new(), &filters).unwrap();

        assert_eq!(ids(&result), vec![1]);
        assert_eq!(result.total_candidates, 1);
    }

    #[test]
    fn test_servings_rescale_copies_only() {
        let recommender = Recommender::with_defaults();
        let catalog = vec![create_recipe(1, 10, &["2 cups flour", "salt"])];
        let filters = FilterSpec {
            servings: 3,
            ..FilterSpec::default()
        };

        let result = recommender.recommend(&catalog, &Pantry::new(), &filters).unwrap();

        assert_eq!(result.recipes[0].recipe.ingredients, vec!["3 cups flour", "salt"]);
        assert_eq!(result.recipes[0].servings, 3);
        assert_eq!(catalog[0].ingredients, vec!["2 cups flour", "salt"]);
    }

    #[test]
    fn test_respects_limit() {
        let recommender = Recommender::with_defaults();
        let catalog: Vec<Recipe> = (0..30)
            .map(|i| create_recipe(i, 10 + i, &["1 onion"]))
            .collect();

        let result = recommender
            .recommend(&catalog, &Pantry::new(), &FilterSpec::default())
            .unwrap();

        assert_eq!(result.recipes.len(), DEFAULT_RESULT_LIMIT);
        assert_eq!(result.total_candidates, 30);
    }

    #[test]
    fn test_zero_servings_rejected() {
        let recommender = Recommender::with_defaults();
        let catalog = vec![create_recipe(1, 10, &["1 onion"])];
        let filters = FilterSpec {
            servings: 0,
            ..FilterSpec::default()
        };

        let result = recommender.recommend(&catalog, &Pantry::new(), &filters);
        assert!(matches!(result, Err(ScalingError::InvalidArgument(_))));
    }
}
