//! Shared fixtures and fakes for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use sqlx::PgPool;

use sentiment_processor::cache::{CacheError, CacheResult, CacheService};
use sentiment_processor::classifier::{Sentiment, SentimentClassifier};
use sentiment_processor::error::Result;

pub async fn seed_keyword(pool: &PgPool, keyword: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO keywords (keyword) VALUES ($1) RETURNING id")
        .bind(keyword)
        .fetch_one(pool)
        .await
        .expect("failed to seed keyword")
}

pub async fn seed_post(pool: &PgPool, keyword_id: i32, content: &str) -> i32 {
    let query = r#"
        INSERT INTO posts (platform, external_id, author, content, keyword_id, posted_at)
        VALUES ('twitter', md5(random()::text), 'test_author', $1, $2, NOW())
        RETURNING id
    "#;

    sqlx::query_scalar(query)
        .bind(content)
        .bind(keyword_id)
        .fetch_one(pool)
        .await
        .expect("failed to seed post")
}

pub async fn count_classifications(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sentiment_analysis")
        .fetch_one(pool)
        .await
        .expect("failed to count classifications")
}

/// Classifier fake driven by a closure, so each test scripts its own
/// per-post outcomes.
pub struct FnClassifier<F>(pub F);

impl<F> SentimentClassifier for FnClassifier<F>
where
    F: Fn(&str) -> Result<Sentiment> + Send + Sync,
{
    fn classify(&self, text: &str) -> Result<Sentiment> {
        (self.0)(text)
    }
}

/// Cache fake that records every deleted key.
#[derive(Debug, Clone, Default)]
pub struct RecordingCacheService {
    pub deleted: Arc<Mutex<Vec<String>>>,
}

impl RecordingCacheService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

impl CacheService for RecordingCacheService {
    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.deleted.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

/// Cache fake whose every operation fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCacheService;

impl CacheService for FailingCacheService {
    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Err(CacheError::Backend("cache unreachable".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}
