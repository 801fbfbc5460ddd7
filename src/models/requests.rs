use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;
use crate::models::domain::{DietaryTag, Difficulty, FilterSpec, Pantry, Prediction, BASELINE_SERVINGS};

/// Request to rank recipes for a pantry
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub pantry: Vec<String>,
    #[serde(default)]
    pub dietary: BTreeSet<DietaryTag>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub max_time: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_servings")]
    pub servings: u32,
}

fn default_servings() -> u32 {
    BASELINE_SERVINGS
}

impl RecommendRequest {
    pub fn pantry(&self) -> Pantry {
        self.pantry.iter().collect()
    }

    pub fn filters(&self) -> FilterSpec {
        FilterSpec {
            dietary: self.dietary.clone(),
            max_time: self.max_time,
            difficulty: self.difficulty,
            servings: self.servings,
        }
    }
}

/// Request to rate a recipe
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RateRequest {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
}

/// Classifier predictions to fold into a pantry
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LabelsRequest {
    #[validate(length(min = 1))]
    pub predictions: Vec<Prediction>,
    #[serde(default)]
    pub pantry: Vec<String>,
}

/// Comma-separated ingredients typed by the user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PantryTextRequest {
    #[validate(length(min = 1))]
    pub text: String,
    #[serde(default)]
    pub pantry: Vec<String>,
}

/// Query string for image recognition: the current pantry, comma-separated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageQuery {
    #[serde(default)]
    pub pantry: Option<String>,
}
