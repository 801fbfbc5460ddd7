use crate::models::{CacheStats, FilterSpec, Pantry, RecommendResponse};
use std::sync::Arc;
use std::time::Duration;

/// Cache key for a recommendation run
///
/// Results depend only on the pantry contents and the filter set (servings
/// included), since the catalog never changes while the process runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecommendKey {
    pub pantry: Pantry,
    pub filters: FilterSpec,
}

impl RecommendKey {
    pub fn new(pantry: &Pantry, filters: &FilterSpec) -> Self {
        Self {
            pantry: pantry.clone(),
            filters: filters.clone(),
        }
    }
}

/// In-process cache of ranked recommendation responses
pub struct RecommendationCache {
    entries: moka::future::Cache<RecommendKey, Arc<RecommendResponse>>,
}

impl RecommendationCache {
    /// Create a new cache
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    pub async fn get(&self, key: &RecommendKey) -> Option<Arc<RecommendResponse>> {
        let hit = self.entries.get(key).await;
        if hit.is_some() {
            tracing::trace!("Recommendation cache hit ({} pantry items)", key.pantry.len());
        }
        hit
    }

    pub async fn insert(&self, key: RecommendKey, value: Arc<RecommendResponse>) {
        self.entries.insert(key, value).await;
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.entry_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietaryTag;

    fn response(total: usize) -> Arc<RecommendResponse> {
        Arc::new(RecommendResponse {
            recipes: vec![],
            total_results: total,
            servings: 2,
        })
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = RecommendationCache::new(100, 60);
        let pantry: Pantry = ["tomato", "onion"].into_iter().collect();
        let key = RecommendKey::new(&pantry, &FilterSpec::default());

        assert!(cache.get(&key).await.is_none());
        cache.insert(key.clone(), response(4)).await;
        assert_eq!(cache.get(&key).await.map(|r| r.total_results), Some(4));
    }

    #[tokio::test]
    async fn test_stats_count_entries() {
        let cache = RecommendationCache::new(100, 60);
        let pantry: Pantry = ["basil"].into_iter().collect();
        cache.insert(RecommendKey::new(&pantry, &FilterSpec::default()), response(2)).await;
        cache.entries.run_pending_tasks().await;

        assert_eq!(cache.stats().entries, 1);
    }

    #[tokio::test]
    async fn test_key_ignores_pantry_case_and_order() {
        let cache = RecommendationCache::new(100, 60);
        let a: Pantry = ["Onion", "tomato"].into_iter().collect();
        let b: Pantry = ["tomato", "onion"].into_iter().collect();

        cache.insert(RecommendKey::new(&a, &FilterSpec::default()), response(1)).await;
        assert!(cache.get(&RecommendKey::new(&b, &FilterSpec::default())).await.is_some());
    }

    #[tokio::test]
    async fn test_key_distinguishes_filters() {
        let cache = RecommendationCache::new(100, 60);
        let pantry: Pantry = ["rice"].into_iter().collect();
        cache.insert(RecommendKey::new(&pantry, &FilterSpec::default()), response(1)).await;

        let doubled = FilterSpec {
            servings: 4,
            ..FilterSpec::default()
        };
        let vegan = FilterSpec {
            dietary: [DietaryTag::Vegan].into_iter().collect(),
            ..FilterSpec::default()
        };
        assert!(cache.get(&RecommendKey::new(&pantry, &doubled)).await.is_none());
        assert!(cache.get(&RecommendKey::new(&pantry, &vegan)).await.is_none());
    }
}
