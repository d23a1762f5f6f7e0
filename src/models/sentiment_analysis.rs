//! # Sentiment Analysis Model
//!
//! The durable, at-most-once result of classifying one post. Uniqueness on
//! `post_id` is the invariant that prevents duplicate work: the selector
//! treats a post as done as soon as a row references it, and the writer
//! ignores conflicts so that concurrent workers cannot produce a second
//! classification.
//!
//! ## Database Schema
//!
//! Maps to the `sentiment_analysis` table:
//! - `id`: Primary key (SERIAL)
//! - `post_id`: References the classified post (INTEGER, UNIQUE)
//! - `sentiment`: `positive` / `neutral` / `negative` (VARCHAR)
//! - `score`: Compound polarity score, -1.00 to 1.00 (DECIMAL(3,2))
//! - `analyzed_at`: Timestamp, defaults to NOW()

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};

/// Sentiment label stored alongside the compound score.
///
/// Stored as lowercase text in the `sentiment` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Map a VADER compound score to a label.
    ///
    /// Thresholds follow the standard VADER convention: >= 0.05 is
    /// positive, <= -0.05 is negative, everything between is neutral.
    /// The boundary values themselves are positive/negative.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            SentimentLabel::Positive
        } else if compound <= -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed classification row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SentimentAnalysis {
    pub id: i32,
    pub post_id: i32,
    pub sentiment: SentimentLabel,
    pub score: f64,
    pub analyzed_at: NaiveDateTime,
}

impl SentimentAnalysis {
    /// Insert a classification for `post_id`, ignoring the write if one
    /// already exists.
    ///
    /// Returns `true` when this call inserted the row, `false` when a
    /// classification was already present (another worker or an earlier
    /// retry won the race). Neither outcome is an error; the first
    /// successful write wins and later calls never modify it.
    pub async fn insert_if_absent<'e, E>(
        executor: E,
        post_id: i32,
        sentiment: SentimentLabel,
        score: f64,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = r#"
            INSERT INTO sentiment_analysis (post_id, sentiment, score)
            VALUES ($1, $2, $3)
            ON CONFLICT (post_id) DO NOTHING
        "#;

        let result = sqlx::query(query)
            .bind(post_id)
            .bind(sentiment)
            .bind(score)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Look up the classification for a post, if any.
    pub async fn find_by_post_id<'e, E>(
        executor: E,
        post_id: i32,
    ) -> Result<Option<SentimentAnalysis>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        // score is DECIMAL(3,2) in the schema; cast to FLOAT8 for decoding.
        let query = r#"
            SELECT id, post_id, sentiment, score::FLOAT8 AS score, analyzed_at
            FROM sentiment_analysis
            WHERE post_id = $1
        "#;

        sqlx::query_as::<_, SentimentAnalysis>(query)
            .bind(post_id)
            .fetch_optional(executor)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_compound_thresholds() {
        assert_eq!(SentimentLabel::from_compound(0.85), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-0.6), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_from_compound_boundaries() {
        // The thresholds themselves are inclusive.
        assert_eq!(SentimentLabel::from_compound(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(0.049), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(-0.049), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_renders_lowercase() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
        assert_eq!(SentimentLabel::Neutral.as_str(), "neutral");
        assert_eq!(SentimentLabel::Negative.as_str(), "negative");
    }
}
