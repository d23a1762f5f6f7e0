//! No-op cache provider.
//!
//! Every delete succeeds silently. Used when Redis is unreachable at
//! startup (graceful degradation: the read path's TTLs bound staleness)
//! and in tests.

use crate::cache::errors::CacheResult;
use crate::cache::traits::CacheService;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCacheService;

impl NoOpCacheService {
    pub fn new() -> Self {
        Self
    }
}

impl CacheService for NoOpCacheService {
    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "noop"
    }
}
