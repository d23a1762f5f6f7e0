pub mod post;
pub mod sentiment_analysis;

// Re-export core models for easy access
pub use post::Post;
pub use sentiment_analysis::{SentimentAnalysis, SentimentLabel};
