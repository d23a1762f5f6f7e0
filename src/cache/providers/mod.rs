//! Concrete cache service providers.

mod noop;
mod redis;

pub use noop::NoOpCacheService;
pub use self::redis::RedisCacheService;
