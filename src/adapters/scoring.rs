//! Placeholder quality scorer.

use rand::Rng;

use crate::domain::models::QualityScores;
use crate::domain::ports::QualityScorer;
use crate::services::aggregator::round2;

/// Bounded pseudo-random stand-in for a real quality model.
///
/// Each dimension is drawn uniformly from its own range, mirroring the score
/// distribution a future model is expected to produce. The response time is
/// mocked the same way, except that transcripts with fewer than two messages
/// have no response gap and score exactly 0.0.
pub struct RandomQualityScorer;

impl QualityScorer for RandomQualityScorer {
    fn score(&self, message_count: usize) -> QualityScores {
        let mut rng = rand::thread_rng();
        QualityScores {
            clarity: Some(round2(rng.gen_range(3.5..=5.0))),
            relevance: Some(round2(rng.gen_range(3.0..=4.8))),
            accuracy: Some(round2(rng.gen_range(3.2..=4.9))),
            completeness: Some(round2(rng.gen_range(3.0..=4.7))),
            empathy: Some(round2(rng.gen_range(2.5..=4.5))),
            response_time_avg: if message_count < 2 {
                0.0
            } else {
                round2(rng.gen_range(5.0..=45.0))
            },
        }
    }
}
