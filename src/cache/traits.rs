//! Cache service trait definition.

use super::errors::CacheResult;

/// Trait defining the cache operations this worker needs.
///
/// Implemented by concrete providers (Redis, NoOp) and by test fakes.
/// The worker never reads or writes cache values; deletion is the whole
/// surface.
pub trait CacheService: Send + Sync {
    /// Delete a key from the cache.
    ///
    /// Deleting a key that does not exist (already evicted or expired)
    /// succeeds.
    fn delete(&self, key: &str) -> impl std::future::Future<Output = CacheResult<()>> + Send;

    /// Get the name of the cache provider
    fn provider_name(&self) -> &'static str;
}
