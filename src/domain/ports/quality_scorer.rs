//! Pluggable quality scoring seam.

use crate::domain::models::QualityScores;

/// Produces the five quality dimensions and the average response time for a
/// conversation.
///
/// The current implementation ([`RandomQualityScorer`]) is a bounded
/// pseudo-random placeholder pending a real scoring model. Implementations
/// must keep every dimension within [0,5] and return a `response_time_avg`
/// of exactly 0.0 when `message_count < 2`.
///
/// [`RandomQualityScorer`]: crate::adapters::scoring::RandomQualityScorer
pub trait QualityScorer: Send + Sync {
    fn score(&self, message_count: usize) -> QualityScores;
}
