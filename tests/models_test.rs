//! Selector and writer contract tests against an isolated database.

mod common;

use sqlx::PgPool;

use common::{seed_keyword, seed_post};
use sentiment_processor::models::{Post, SentimentAnalysis, SentimentLabel};

#[sqlx::test]
async fn test_empty_store_returns_empty_batch(pool: PgPool) -> sqlx::Result<()> {
    let posts = Post::find_unanalyzed(&pool, 10).await?;
    assert!(posts.is_empty());
    Ok(())
}

#[sqlx::test]
async fn test_selector_returns_only_pending_posts(pool: PgPool) -> sqlx::Result<()> {
    let keyword_id = seed_keyword(&pool, "rustlang").await;
    let classified = seed_post(&pool, keyword_id, "already handled").await;
    let pending = seed_post(&pool, keyword_id, "still waiting").await;

    SentimentAnalysis::insert_if_absent(&pool, classified, SentimentLabel::Neutral, 0.0).await?;

    let posts = Post::find_unanalyzed(&pool, 10).await?;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, pending);
    assert_eq!(posts[0].content, "still waiting");
    assert_eq!(posts[0].keyword_id, keyword_id);

    Ok(())
}

#[sqlx::test]
async fn test_selector_respects_limit(pool: PgPool) -> sqlx::Result<()> {
    let keyword_id = seed_keyword(&pool, "rustlang").await;
    for i in 0..5 {
        seed_post(&pool, keyword_id, &format!("post {i}")).await;
    }

    let posts = Post::find_unanalyzed(&pool, 3).await?;
    assert_eq!(posts.len(), 3);

    Ok(())
}

#[sqlx::test]
async fn test_insert_if_absent_is_idempotent(pool: PgPool) -> sqlx::Result<()> {
    let keyword_id = seed_keyword(&pool, "rustlang").await;
    let post_id = seed_post(&pool, keyword_id, "I love this product!").await;

    let first =
        SentimentAnalysis::insert_if_absent(&pool, post_id, SentimentLabel::Positive, 0.85).await?;
    assert!(first, "first write should insert");

    // Second write with a different result must be a no-op.
    let second =
        SentimentAnalysis::insert_if_absent(&pool, post_id, SentimentLabel::Negative, -0.4).await?;
    assert!(!second, "second write must not insert");

    let row = SentimentAnalysis::find_by_post_id(&pool, post_id)
        .await?
        .expect("classification should exist");
    assert_eq!(row.post_id, post_id);
    assert_eq!(row.sentiment, SentimentLabel::Positive);
    assert!((row.score - 0.85).abs() < 1e-9, "first write wins: {}", row.score);

    Ok(())
}

#[sqlx::test]
async fn test_classified_post_never_selected_again(pool: PgPool) -> sqlx::Result<()> {
    let keyword_id = seed_keyword(&pool, "rustlang").await;
    let post_id = seed_post(&pool, keyword_id, "I love this product!").await;

    SentimentAnalysis::insert_if_absent(&pool, post_id, SentimentLabel::Positive, 0.85).await?;

    let posts = Post::find_unanalyzed(&pool, 10).await?;
    assert!(posts.is_empty());

    Ok(())
}

#[sqlx::test]
async fn test_find_by_post_id_missing_is_none(pool: PgPool) -> sqlx::Result<()> {
    let found = SentimentAnalysis::find_by_post_id(&pool, 9999).await?;
    assert!(found.is_none());
    Ok(())
}
