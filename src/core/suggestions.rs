use crate::models::Recipe;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Default number of suggestions returned
pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

/// Mean rating accumulated for one cuisine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineAffinity {
    pub cuisine: String,
    pub mean_rating: f64,
    pub rated_recipes: usize,
}

/// Output of the suggestion ranker
#[derive(Debug, Clone, Default)]
pub struct SuggestionResult {
    pub recipes: Vec<Recipe>,
    /// Cuisines by mean rating, best first
    pub cuisines: Vec<CuisineAffinity>,
}

/// Rank cuisines by the mean of the user's ratings
///
/// Ratings for ids missing from the catalog are skipped. Equal means keep
/// the order in which each cuisine was first seen while walking the rating
/// history by ascending recipe id.
pub fn rank_cuisines(catalog: &[Recipe], ratings: &BTreeMap<u32, u8>) -> Vec<CuisineAffinity> {
    let by_id: HashMap<u32, &Recipe> = catalog.iter().map(|r| (r.id, r)).collect();

    // (cuisine, sum, count) in first-occurrence order
    let mut totals: Vec<(&str, u32, usize)> = Vec::new();
    for (id, rating) in ratings {
        let Some(recipe) = by_id.get(id) else {
            tracing::trace!("Skipping rating for unknown recipe {}", id);
            continue;
        };

        match totals.iter_mut().find(|(c, _, _)| *c == recipe.cuisine) {
            Some((_, sum, count)) => {
                *sum += u32::from(*rating);
                *count += 1;
            }
            None => totals.push((recipe.cuisine.as_str(), u32::from(*rating), 1)),
        }
    }

    let mut ranked: Vec<CuisineAffinity> = totals
        .into_iter()
        .map(|(cuisine, sum, count)| CuisineAffinity {
            cuisine: cuisine.to_string(),
            mean_rating: f64::from(sum) / count as f64,
            rated_recipes: count,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.mean_rating
            .partial_cmp(&a.mean_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}

/// Suggest unfavorited recipes from cuisines the user has rated
///
/// Suggestions keep catalog order. An empty rating history yields no
/// suggestions.
pub fn suggest(
    catalog: &[Recipe],
    ratings: &BTreeMap<u32, u8>,
    favorites: &BTreeSet<u32>,
    limit: usize,
) -> SuggestionResult {
    if ratings.is_empty() {
        return SuggestionResult::default();
    }

    let cuisines = rank_cuisines(catalog, ratings);
    let wanted: BTreeSet<&str> = cuisines.iter().map(|c| c.cuisine.as_str()).collect();

    let recipes: Vec<Recipe> = catalog
        .iter()
        .filter(|r| wanted.contains(r.cuisine.as_str()) && !favorites.contains(&r.id))
        .take(limit)
        .cloned()
        .collect();

    SuggestionResult { recipes, cuisines }
}
