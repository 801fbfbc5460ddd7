use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

/// Number of servings every catalog recipe is written for
pub const BASELINE_SERVINGS: u32 = 2;

/// Inclusive bounds for a user rating
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Recipe difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary tag vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

impl DietaryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::GlutenFree => "gluten-free",
            DietaryTag::DairyFree => "dairy-free",
        }
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-serving nutrition facts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fat_g: f64,
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    /// Total time in minutes
    pub time: u32,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub dietary: BTreeSet<DietaryTag>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub substitutions: BTreeMap<String, Vec<String>>,
}

/// The user's known-available ingredients
///
/// Entries are trimmed and lower-cased on the way in, so the set is
/// case-insensitive and never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Pantry {
    items: BTreeSet<String>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    fn canonical(item: &str) -> Option<String> {
        let item = item.trim().to_lowercase();
        if item.is_empty() {
            None
        } else {
            Some(item)
        }
    }

    /// Add an ingredient, returning true if it was not already present
    pub fn insert(&mut self, item: &str) -> bool {
        match Self::canonical(item) {
            Some(item) => self.items.insert(item),
            None => false,
        }
    }

    pub fn remove(&mut self, item: &str) -> bool {
        match Self::canonical(item) {
            Some(item) => self.items.remove(&item),
            None => false,
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        Self::canonical(item).is_some_and(|item| self.items.contains(&item))
    }

    /// Union another collection of ingredient names into the pantry
    pub fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.insert(item.as_ref());
        }
    }

    /// Split comma-separated free text into ingredient names
    pub fn parse_text(text: &str) -> Vec<String> {
        text.split(',')
            .filter_map(Self::canonical)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<String>> for Pantry {
    fn from(items: Vec<String>) -> Self {
        let mut pantry = Pantry::new();
        pantry.extend(items);
        pantry
    }
}

impl From<Pantry> for Vec<String> {
    fn from(pantry: Pantry) -> Self {
        pantry.items.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Pantry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pantry = Pantry::new();
        pantry.extend(iter);
        pantry
    }
}

/// Hard filters applied to a recommendation request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(default)]
    pub dietary: BTreeSet<DietaryTag>,
    #[serde(default)]
    pub max_time: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default = "default_servings")]
    pub servings: u32,
}

fn default_servings() -> u32 {
    BASELINE_SERVINGS
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            dietary: BTreeSet::new(),
            max_time: None,
            difficulty: None,
            servings: BASELINE_SERVINGS,
        }
    }
}

/// One classifier prediction, best first in classifier output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(alias = "className")]
    pub label: String,
    #[serde(alias = "probability", default)]
    pub confidence: f64,
}

/// A serving-adjusted recipe paired with its pantry match count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub match_count: u32,
    pub servings: u32,
}

/// Errors raised when mutating user data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserDataError {
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

/// Favorites and ratings persisted for the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub favorites: BTreeSet<u32>,
    #[serde(default)]
    pub ratings: BTreeMap<u32, u8>,
}

impl UserData {
    /// Add the recipe to favorites if absent, remove it if present.
    /// Returns whether the recipe is a favorite afterwards.
    pub fn toggle_favorite(&mut self, recipe_id: u32) -> bool {
        if self.favorites.remove(&recipe_id) {
            false
        } else {
            self.favorites.insert(recipe_id);
            true
        }
    }

    /// Overwrite the rating for a recipe
    pub fn set_rating(&mut self, recipe_id: u32, rating: u8) -> Result<(), UserDataError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(UserDataError::InvalidRating(rating));
        }
        self.ratings.insert(recipe_id, rating);
        Ok(())
    }

    pub fn is_favorite(&self, recipe_id: u32) -> bool {
        self.favorites.contains(&recipe_id)
    }
}
