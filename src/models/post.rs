//! # Post Model
//!
//! A post is a unit of ingested text content awaiting sentiment
//! classification. Posts are created by the ingestion services and are
//! immutable from this worker's perspective; the worker only reads them.
//!
//! A post is *pending* while no `sentiment_analysis` row references it.
//! [`Post::find_unanalyzed`] is the only selection path and returns pending
//! posts exclusively.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};

/// Pending-work projection of the `posts` table.
///
/// Only the columns the worker needs: the id to key the classification,
/// the content to classify, and the keyword id whose cached statistics
/// must be invalidated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i32,
    pub content: String,
    pub keyword_id: i32,
}

impl Post {
    /// Select up to `limit` posts that have no sentiment classification yet.
    ///
    /// Left anti-join against `sentiment_analysis`; a post drops out of the
    /// result set permanently once a classification row exists for it.
    /// There is deliberately no ORDER BY: callers must not rely on any
    /// particular ordering across calls.
    ///
    /// Returns an empty vector when nothing is pending. That is the normal
    /// idle condition, not an error.
    ///
    /// Takes any `PgExecutor` so the coordinator can run the selection
    /// inside the batch transaction.
    pub async fn find_unanalyzed<'e, E>(executor: E, limit: i64) -> Result<Vec<Post>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = r#"
            SELECT p.id, p.content, p.keyword_id
            FROM posts p
            LEFT JOIN sentiment_analysis sa ON p.id = sa.post_id
            WHERE sa.id IS NULL
            LIMIT $1
        "#;

        sqlx::query_as::<_, Post>(query)
            .bind(limit)
            .fetch_all(executor)
            .await
    }
}
