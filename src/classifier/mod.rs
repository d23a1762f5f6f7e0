//! Sentiment classification seam.
//!
//! The worker treats classification as an injected capability rather than
//! a module-level singleton: the coordinator is generic over
//! [`SentimentClassifier`], so tests substitute scripted fakes and the
//! binary wires in the VADER adapter.

mod vader;

pub use vader::VaderClassifier;

use crate::error::Result;
use crate::models::SentimentLabel;

/// A classified sentiment: the stored label plus the continuous score it
/// was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

/// Pure text-to-sentiment function.
///
/// Implementations hold no mutable state and have no failure mode beyond
/// rejecting malformed input with `ProcessorError::Classification`.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Sentiment>;
}
