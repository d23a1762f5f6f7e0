//! Best-effort invalidation of cached keyword statistics.

use tracing::{debug, warn};

use super::traits::CacheService;

/// Fixed namespace prefix for cached keyword statistics. Must match the
/// key format the API's read path caches under.
pub const STATS_NAMESPACE: &str = "sentiment:stats:keyword";

/// Deletes cached aggregate statistics for a keyword after its
/// classifications change.
///
/// Invalidation is best-effort by contract: a cache outage must not abort
/// a batch or unwind a committed classification, so [`invalidate`]
/// swallows failures after logging them. Stale aggregates are recomputed
/// or expire on the read path.
///
/// [`invalidate`]: StatsCacheInvalidator::invalidate
#[derive(Debug, Clone)]
pub struct StatsCacheInvalidator<C> {
    cache: C,
    namespace: String,
}

impl<C: CacheService> StatsCacheInvalidator<C> {
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            namespace: STATS_NAMESPACE.to_string(),
        }
    }

    /// Cache key for one keyword's aggregate statistics.
    pub fn key_for(&self, keyword_id: i32) -> String {
        format!("{}:{}", self.namespace, keyword_id)
    }

    /// Delete the cached statistics for `keyword_id`, logging and
    /// swallowing any failure.
    pub async fn invalidate(&self, keyword_id: i32) {
        let key = self.key_for(keyword_id);

        match self.cache.delete(&key).await {
            Ok(()) => debug!(key = %key, "cache invalidated"),
            Err(e) => warn!(
                key = %key,
                provider = self.cache.provider_name(),
                error = %e,
                "cache invalidation failed; stats stay stale until the read path refreshes them"
            ),
        }
    }
}
