#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Sentiment Processor
//!
//! Batch worker that continuously scans PostgreSQL for posts without a
//! sentiment classification, classifies each post, persists the result
//! exactly once per post, and invalidates the cached keyword statistics
//! affected by the new result.
//!
//! ## Consistency contract
//!
//! - A post is *pending* while no `sentiment_analysis` row references it;
//!   the selector only ever returns pending posts.
//! - Writes are idempotent (`ON CONFLICT (post_id) DO NOTHING`), so two
//!   workers racing on the same post produce exactly one classification.
//! - One transaction spans a whole batch: a mid-batch failure rolls back
//!   every write and the posts stay pending for the next cycle.
//! - Cache invalidation runs only after the commit and is best-effort; a
//!   cache outage never unwinds a durable classification.
//!
//! ## Module Organization
//!
//! - [`models`] - Data layer: pending-post selection and idempotent writes
//! - [`classifier`] - Sentiment classification seam and the VADER adapter
//! - [`cache`] - Keyword statistics cache providers and the invalidator
//! - [`processor`] - Batch coordinator and poll loop
//! - [`database`] - Connection management
//! - [`config`] - Environment-sourced configuration
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentiment_processor::cache::{CacheBackend, StatsCacheInvalidator};
//! use sentiment_processor::classifier::VaderClassifier;
//! use sentiment_processor::database::DatabaseConnection;
//! use sentiment_processor::{ProcessorConfig, SentimentProcessor};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ProcessorConfig::from_env()?;
//! let db = DatabaseConnection::new(&config).await?;
//! let cache = CacheBackend::connect(&config.redis_url()).await;
//!
//! let processor = SentimentProcessor::new(
//!     db.pool().clone(),
//!     VaderClassifier::new(),
//!     StatsCacheInvalidator::new(cache),
//!     &config,
//! );
//! processor.run().await;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod classifier;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod processor;

pub use config::ProcessorConfig;
pub use error::{ProcessorError, Result};
pub use processor::{SentimentProcessor, ShutdownHandle};
