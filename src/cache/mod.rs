//! Keyword statistics cache layer.
//!
//! The read path (out of scope here) caches aggregate sentiment statistics
//! per keyword in Redis. This worker only ever deletes those entries, and
//! only after the classifications that invalidate them have committed.
//!
//! Structure: a [`CacheService`] trait with Redis and no-op providers,
//! enum dispatch via [`CacheBackend`], and the [`StatsCacheInvalidator`]
//! that owns the key namespace and the best-effort contract.

pub mod errors;
mod invalidator;
mod provider;
pub mod providers;
pub mod traits;

pub use errors::{CacheError, CacheResult};
pub use invalidator::{StatsCacheInvalidator, STATS_NAMESPACE};
pub use provider::CacheBackend;
pub use providers::{NoOpCacheService, RedisCacheService};
pub use traits::CacheService;
