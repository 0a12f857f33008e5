//! Analysis result domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Overall polarity of the user's side of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::Neutral
    }
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }

    /// Weighted contribution of this sentiment to the overall score.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Positive => 5.0,
            Self::Neutral => 3.0,
            Self::Negative => 1.0,
        }
    }
}

/// The quality dimensions produced by a [`QualityScorer`] implementation,
/// plus the estimated average response time.
///
/// Each dimension is on a 0-5 scale. A scorer may omit dimensions it cannot
/// estimate; the aggregator counts a missing dimension as 0 rather than
/// dropping it from the denominator. This record is the stable seam between
/// the scorer and the aggregator: a model-backed scorer replaces the random
/// placeholder without the aggregation contract changing.
///
/// [`QualityScorer`]: crate::domain::ports::QualityScorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    pub clarity: Option<f64>,
    pub relevance: Option<f64>,
    pub accuracy: Option<f64>,
    pub completeness: Option<f64>,
    pub empathy: Option<f64>,
    /// Average seconds between messages; 0.0 for transcripts shorter than 2
    pub response_time_avg: f64,
}

/// The complete analysis record for one conversation.
///
/// Created fresh per analysis run. At most one record is durably associated
/// with a conversation: a later run replaces the earlier one (upsert, never
/// append). `sentiment`, `resolution`, `escalation_need`, and
/// `fallback_frequency` are deterministic for identical text; the quality
/// dimensions and `response_time_avg` come from the pluggable scorer and may
/// vary between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationAnalysis {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sentiment: Sentiment,
    /// Non-negative seconds; 0.0 when fewer than two messages exist
    pub response_time_avg: f64,
    /// Did the final message suggest the issue was solved?
    pub resolution: bool,
    /// Did the user ask for a human at any point?
    pub escalation_need: bool,
    /// Count of (AI message, fallback phrase) pairs that matched
    pub fallback_frequency: u32,
    pub clarity_score: Option<f64>,
    pub relevance_score: Option<f64>,
    pub accuracy_score: Option<f64>,
    pub completeness_score: Option<f64>,
    pub empathy_score: Option<f64>,
    /// Aggregate satisfaction score in [0,5]; always computed last
    pub overall_score: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_roundtrip() {
        for s in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
            assert_eq!(Sentiment::from_str(s.as_str()), Some(s));
        }
        assert_eq!(Sentiment::from_str("NEGATIVE"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_str("mixed"), None);
    }

    #[test]
    fn test_sentiment_weights() {
        assert_eq!(Sentiment::Positive.weight(), 5.0);
        assert_eq!(Sentiment::Neutral.weight(), 3.0);
        assert_eq!(Sentiment::Negative.weight(), 1.0);
    }
}
