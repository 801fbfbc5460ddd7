use crate::core::filters::is_disqualified;
use crate::models::{DietaryTag, Difficulty, Pantry, Recipe};
use std::collections::BTreeSet;

/// Score returned for a recipe that fails a hard filter
pub const DISQUALIFIED: i32 = -1;

/// Score a recipe against the pantry and hard filters
///
/// Returns [`DISQUALIFIED`] if the dietary, time or difficulty filter
/// rejects the recipe. Otherwise returns the number of distinct pantry
/// entries found as a case-insensitive substring of at least one
/// ingredient line, so "tomato" matches "2 diced tomatoes".
pub fn score_recipe(
    recipe: &Recipe,
    pantry: &Pantry,
    dietary: &BTreeSet<DietaryTag>,
    max_time: Option<u32>,
    difficulty: Option<Difficulty>,
) -> i32 {
    if is_disqualified(recipe, dietary, max_time, difficulty) {
        return DISQUALIFIED;
    }

    let matches = count_pantry_matches(recipe, pantry);
    i32::try_from(matches).unwrap_or(i32::MAX)
}

/// Count distinct pantry entries mentioned anywhere in the ingredient list
pub fn count_pantry_matches(recipe: &Recipe, pantry: &Pantry) -> usize {
    let lines: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|line| line.to_lowercase())
        .collect();

    pantry
        .iter()
        .filter(|item| lines.iter().any(|line| line.contains(*item)))
        .count()
}
