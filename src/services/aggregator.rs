//! Overall satisfaction score aggregation.

use crate::domain::models::ConversationAnalysis;

/// Number of weighted contributions; fixed regardless of missing dimensions.
const CONTRIBUTION_COUNT: f64 = 7.0;

/// Resolution contribution when the conversation looks resolved.
const RESOLVED_WEIGHT: f64 = 5.0;
const UNRESOLVED_WEIGHT: f64 = 1.0;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the overall satisfaction score for an analysis record.
///
/// The mean of exactly 7 equally weighted contributions: the five quality
/// dimensions, the sentiment mapped to 5/3/1, and the resolution flag mapped
/// to 5/1. A missing quality dimension counts as 0 in the numerator while
/// the denominator stays 7, so missing data is penalized rather than ignored.
/// Rounded to two decimals; always within [0,5].
pub fn overall_score(analysis: &ConversationAnalysis) -> f64 {
    let contributions = [
        analysis.clarity_score.unwrap_or(0.0),
        analysis.relevance_score.unwrap_or(0.0),
        analysis.accuracy_score.unwrap_or(0.0),
        analysis.completeness_score.unwrap_or(0.0),
        analysis.empathy_score.unwrap_or(0.0),
        analysis.sentiment.weight(),
        if analysis.resolution {
            RESOLVED_WEIGHT
        } else {
            UNRESOLVED_WEIGHT
        },
    ];

    round2(contributions.iter().sum::<f64>() / CONTRIBUTION_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Sentiment;
    use chrono::Utc;
    use uuid::Uuid;

    fn analysis_with(
        sentiment: Sentiment,
        resolution: bool,
        scores: [Option<f64>; 5],
    ) -> ConversationAnalysis {
        ConversationAnalysis {
            id: Uuid::new_v4(),
            conversation_id: Uuid::new_v4(),
            sentiment,
            response_time_avg: 0.0,
            resolution,
            escalation_need: false,
            fallback_frequency: 0,
            clarity_score: scores[0],
            relevance_score: scores[1],
            accuracy_score: scores[2],
            completeness_score: scores[3],
            empathy_score: scores[4],
            overall_score: 0.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_all_dimensions_present() {
        let analysis = analysis_with(
            Sentiment::Positive,
            true,
            [Some(4.0), Some(4.0), Some(4.0), Some(4.0), Some(4.0)],
        );
        // (4*5 + 5 + 5) / 7 = 30/7
        assert_eq!(overall_score(&analysis), round2(30.0 / 7.0));
    }

    #[test]
    fn test_missing_dimension_counts_as_zero() {
        let analysis = analysis_with(
            Sentiment::Neutral,
            false,
            [Some(4.0), None, Some(4.0), Some(4.0), Some(4.0)],
        );
        // Denominator stays 7 even with a missing dimension.
        assert_eq!(overall_score(&analysis), round2((16.0 + 3.0 + 1.0) / 7.0));
    }

    #[test]
    fn test_sentiment_and_resolution_mapping() {
        let scores = [Some(3.0); 5];
        let positive = analysis_with(Sentiment::Positive, true, scores);
        let negative = analysis_with(Sentiment::Negative, false, scores);
        assert_eq!(overall_score(&positive), round2(25.0 / 7.0));
        assert_eq!(overall_score(&negative), round2(17.0 / 7.0));
    }

    #[test]
    fn test_bounds() {
        let floor = analysis_with(Sentiment::Negative, false, [None; 5]);
        let ceiling = analysis_with(Sentiment::Positive, true, [Some(5.0); 5]);
        assert!(overall_score(&floor) >= 0.0);
        assert!(overall_score(&ceiling) <= 5.0);
        assert_eq!(overall_score(&floor), round2(2.0 / 7.0));
        assert_eq!(overall_score(&ceiling), 5.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.676), 2.68);
        assert_eq!(round2(4.0), 4.0);
    }
}
