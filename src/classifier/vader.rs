//! VADER adapter.
//!
//! Wraps the rule-based VADER analyzer and maps its compound polarity
//! score onto [`SentimentLabel`] via the standard ±0.05 thresholds.

use vader_sentiment::SentimentIntensityAnalyzer;

use super::{Sentiment, SentimentClassifier};
use crate::error::{ProcessorError, Result};
use crate::models::SentimentLabel;

/// Holds one analyzer for the life of the worker; it borrows the
/// process-wide lexicon tables, so construction is not per-post work.
pub struct VaderClassifier {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl std::fmt::Debug for VaderClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderClassifier").finish()
    }
}

impl VaderClassifier {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier for VaderClassifier {
    fn classify(&self, text: &str) -> Result<Sentiment> {
        let scores = self.analyzer.polarity_scores(text);

        let compound = scores.get("compound").copied().ok_or_else(|| {
            ProcessorError::Classification(format!(
                "analyzer produced no compound score for {}-char input",
                text.len()
            ))
        })?;

        Ok(Sentiment {
            label: SentimentLabel::from_compound(compound),
            score: compound,
        })
    }
}
