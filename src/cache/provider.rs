//! Cache backend selection with enum dispatch.
//!
//! The binary picks the backend at startup; consumers stay generic over
//! [`CacheService`] and never branch on the concrete provider.

use tracing::{info, warn};

use super::errors::CacheResult;
use super::providers::{NoOpCacheService, RedisCacheService};
use super::traits::CacheService;

/// Runtime-selected cache backend.
#[derive(Debug, Clone)]
pub enum CacheBackend {
    Redis(RedisCacheService),
    NoOp(NoOpCacheService),
}

impl CacheBackend {
    /// Connect to Redis, falling back to the no-op provider if the cache
    /// is unreachable. Losing invalidation is recoverable (entries expire
    /// or get recomputed); refusing to start is not.
    pub async fn connect(url: &str) -> Self {
        match RedisCacheService::connect(url).await {
            Ok(service) => {
                info!(url = url, "cache backend: redis");
                Self::Redis(service)
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    "Redis unreachable; cache invalidation disabled"
                );
                Self::NoOp(NoOpCacheService::new())
            }
        }
    }
}

impl CacheService for CacheBackend {
    async fn delete(&self, key: &str) -> CacheResult<()> {
        match self {
            Self::Redis(s) => s.delete(key).await,
            Self::NoOp(s) => s.delete(key).await,
        }
    }

    fn provider_name(&self) -> &'static str {
        match self {
            Self::Redis(s) => s.provider_name(),
            Self::NoOp(s) => s.provider_name(),
        }
    }
}
