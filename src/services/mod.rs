// Service exports
pub mod cache;
pub mod catalog;
pub mod storage;
pub mod vision;

pub use cache::{RecommendKey, RecommendationCache};
pub use catalog::{Catalog, CatalogError};
pub use storage::{JsonFileStore, MemoryStore, StorageError, UserDataService, UserDataStore};
pub use vision::{
    recognize_ingredients, Classifier, HttpClassifier, LazyClassifier, VisionError, DEFAULT_TOP_N,
};
