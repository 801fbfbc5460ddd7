use crate::models::{DietaryTag, Difficulty, Recipe};
use std::collections::BTreeSet;

/// Every required dietary tag must be carried by the recipe
#[inline]
pub fn satisfies_dietary(recipe: &Recipe, required: &BTreeSet<DietaryTag>) -> bool {
    required.is_empty() || required.is_subset(&recipe.dietary)
}

/// Recipe must fit within the time budget, if one is set
#[inline]
pub fn within_time(recipe: &Recipe, max_time: Option<u32>) -> bool {
    max_time.map_or(true, |max| recipe.time <= max)
}

/// Recipe difficulty must equal the requested one, if one is set
#[inline]
pub fn matches_difficulty(recipe: &Recipe, difficulty: Option<Difficulty>) -> bool {
    difficulty.map_or(true, |d| recipe.difficulty == d)
}

/// Check the hard filters in order: dietary, time, difficulty
///
/// Returns true if any of them rejects the recipe.
#[inline]
pub fn is_disqualified(
    recipe: &Recipe,
    dietary: &BTreeSet<DietaryTag>,
    max_time: Option<u32>,
    difficulty: Option<Difficulty>,
) -> bool {
    if !satisfies_dietary(recipe, dietary) {
        return true;
    }

    if !within_time(recipe, max_time) {
        return true;
    }

    if !matches_difficulty(recipe, difficulty) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrition;
    use std::collections::BTreeMap;

    fn create_test_recipe(time: u32, difficulty: Difficulty, dietary: &[DietaryTag]) -> Recipe {
        Recipe {
            id: 1,
            name: "Test Recipe".to_string(),
            cuisine: "Italian".to_string(),
            difficulty,
            time,
            ingredients: vec!["2 tomatoes".to_string()],
            dietary: dietary.iter().copied().collect(),
            steps: vec![],
            nutrition: Nutrition::default(),
            substitutions: BTreeMap::new(),
        }
    }

    #[test]
    fn test_no_filters_pass() {
        let recipe = create_test_recipe(30, Difficulty::Easy, &[]);
        assert!(!is_disqualified(&recipe, &BTreeSet::new(), None, None));
    }

    #[test]
    fn test_dietary_subset() {
        let recipe = create_test_recipe(30, Difficulty::Easy, &[DietaryTag::Vegetarian, DietaryTag::GlutenFree]);

        let required: BTreeSet<_> = [DietaryTag::Vegetarian].into_iter().collect();
        assert!(satisfies_dietary(&recipe, &required));

        let required: BTreeSet<_> = [DietaryTag::Vegetarian, DietaryTag::Vegan].into_iter().collect();
        assert!(!satisfies_dietary(&recipe, &required));
        assert!(is_disqualified(&recipe, &required, None, None));
    }

    #[test]
    fn test_time_limit_inclusive() {
        let recipe = create_test_recipe(30, Difficulty::Easy, &[]);
        assert!(within_time(&recipe, Some(30)));
        assert!(!within_time(&recipe, Some(29)));
        assert!(within_time(&recipe, None));
    }

    #[test]
    fn test_difficulty_exact() {
        let recipe = create_test_recipe(30, Difficulty::Medium, &[]);
        assert!(matches_difficulty(&recipe, Some(Difficulty::Medium)));
        assert!(!matches_difficulty(&recipe, Some(Difficulty::Easy)));
        assert!(is_disqualified(&recipe, &BTreeSet::new(), None, Some(Difficulty::Hard)));
    }
}
