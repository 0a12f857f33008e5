//! Valence-lexicon sentiment scoring.
//!
//! A compact rule-based scorer in the VADER family: each utterance gets a
//! compound polarity in [-1,1] from a valence lexicon with negation
//! flipping, intensifier boosting, and exclamation amplification. The
//! per-utterance scores are averaged and classified with the conventional
//! +/-0.05 thresholds. Deterministic for identical input text.

use crate::domain::models::Sentiment;

/// Negation flips valence and dampens its magnitude.
const NEGATION_DAMPENER: f64 = -0.74;

/// Each exclamation mark (up to four) amplifies the raw sum.
const EXCLAMATION_BOOST: f64 = 0.292;

/// Normalization constant for mapping the raw sum into [-1,1].
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Classification thresholds on the averaged compound score.
const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Word valences on a roughly -4..4 scale, sorted by word.
static VALENCE_LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("angry", -2.3),
    ("annoyed", -1.9),
    ("annoying", -1.9),
    ("appreciate", 1.9),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("best", 3.2),
    ("better", 1.9),
    ("broke", -1.6),
    ("broken", -1.8),
    ("clear", 1.4),
    ("confused", -1.2),
    ("confusing", -1.4),
    ("crash", -1.6),
    ("crashed", -1.6),
    ("crashes", -1.6),
    ("crashing", -1.6),
    ("disappointed", -2.0),
    ("disappointing", -2.2),
    ("error", -1.7),
    ("errors", -1.7),
    ("excellent", 2.7),
    ("fail", -2.3),
    ("failed", -2.3),
    ("failing", -2.3),
    ("fails", -2.3),
    ("fantastic", 2.6),
    ("fixed", 1.6),
    ("frustrated", -2.1),
    ("frustrating", -2.1),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("hate", -2.7),
    ("helped", 1.7),
    ("helpful", 1.8),
    ("helps", 1.6),
    ("horrible", -2.5),
    ("love", 3.2),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("problem", -1.4),
    ("problems", -1.4),
    ("resolved", 1.7),
    ("slow", -1.2),
    ("solved", 1.8),
    ("stuck", -1.2),
    ("terrible", -2.1),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("unable", -1.2),
    ("unhelpful", -1.8),
    ("useful", 1.9),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wonderful", 2.7),
    ("worked", 1.6),
    ("works", 1.6),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -1.6),
];

static NEGATIONS: &[&str] = &[
    "ain't", "aint", "barely", "can't", "cannot", "cant", "didn't", "didnt", "doesn't", "doesnt",
    "don't", "dont", "hardly", "isn't", "isnt", "neither", "never", "no", "none", "nor", "not",
    "shouldn't", "shouldnt", "wasn't", "wasnt", "without", "won't", "wont", "wouldn't", "wouldnt",
];

/// Intensity adjustments applied to the following valence word. Negative
/// entries are downtoners.
static INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("quite", 0.18),
    ("really", 0.293),
    ("slightly", -0.293),
    ("so", 0.293),
    ("somewhat", -0.15),
    ("super", 0.293),
    ("totally", 0.293),
    ("very", 0.293),
];

fn valence_of(token: &str) -> Option<f64> {
    VALENCE_LEXICON
        .binary_search_by(|(word, _)| word.cmp(&token))
        .ok()
        .map(|i| VALENCE_LEXICON[i].1)
}

fn intensity_of(token: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, boost)| *boost)
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token)
}

/// Lowercase and split on whitespace, trimming boundary punctuation but
/// keeping apostrophes so contractions like "don't" survive.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| c.is_ascii_punctuation() && c != '\'')
                .to_string()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Compound polarity of a single utterance, in [-1,1].
pub fn compound_score(text: &str) -> f64 {
    let tokens = tokenize(text);
    let mut total = 0.0;

    for (i, token) in tokens.iter().enumerate() {
        let Some(mut valence) = valence_of(token) else {
            continue;
        };

        // Look back up to three tokens for intensifiers and negations.
        let start = i.saturating_sub(3);
        for (distance, prior) in tokens[start..i].iter().rev().enumerate() {
            if let Some(boost) = intensity_of(prior) {
                let dampening = match distance {
                    0 => 1.0,
                    1 => 0.95,
                    _ => 0.9,
                };
                valence += valence.signum() * boost * dampening;
            }
            if is_negation(prior) {
                valence *= NEGATION_DAMPENER;
            }
        }

        total += valence;
    }

    if total != 0.0 {
        let exclamations = text.matches('!').count().min(4) as f64;
        total += total.signum() * exclamations * EXCLAMATION_BOOST;
    }

    (total / (total * total + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Classify the overall sentiment of the user's utterances.
///
/// Returns `Neutral` for an empty input. Otherwise the per-utterance
/// compound scores are averaged and classified against the +/-0.05
/// thresholds.
pub fn classify(user_texts: &[&str]) -> Sentiment {
    if user_texts.is_empty() {
        return Sentiment::Neutral;
    }

    let avg = user_texts
        .iter()
        .map(|text| compound_score(text))
        .sum::<f64>()
        / user_texts.len() as f64;

    if avg >= POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if avg <= NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_is_sorted() {
        // binary_search_by depends on this
        for pair in VALENCE_LEXICON.windows(2) {
            assert!(pair[0].0 < pair[1].0, "out of order: {:?}", pair);
        }
    }

    #[test]
    fn test_empty_input_is_neutral() {
        assert_eq!(classify(&[]), Sentiment::Neutral);
    }

    #[test]
    fn test_positive_utterance() {
        let score = compound_score("This is great!");
        assert!(score > 0.05, "got {score}");
        assert_eq!(classify(&["This is great!"]), Sentiment::Positive);
    }

    #[test]
    fn test_negative_utterance() {
        let score = compound_score("My app keeps crashing");
        assert!(score < -0.05, "got {score}");
        assert_eq!(classify(&["My app keeps crashing"]), Sentiment::Negative);
    }

    #[test]
    fn test_no_valence_tokens_is_neutral() {
        assert_eq!(compound_score("Can I talk to a human agent?"), 0.0);
        assert_eq!(
            classify(&["Can I talk to a human agent?"]),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(compound_score("not good") < -0.05);
        assert!(compound_score("this doesn't work, nothing fixed") < compound_score("fixed"));
    }

    #[test]
    fn test_intensifier_boosts_magnitude() {
        assert!(compound_score("very good") > compound_score("good"));
        assert!(compound_score("extremely frustrating") < compound_score("frustrating"));
    }

    #[test]
    fn test_exclamations_amplify() {
        assert!(compound_score("great!!!") > compound_score("great"));
    }

    #[test]
    fn test_mixed_conversation_averages_to_neutral() {
        // One clearly negative, one neutral, one mildly positive message.
        let texts = [
            "My app keeps crashing",
            "Can I talk to a human agent?",
            "thanks anyway",
        ];
        assert_eq!(classify(&texts), Sentiment::Neutral);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let texts = ["thanks, that helps a lot", "perfect, all fixed now"];
        let first = classify(&texts);
        for _ in 0..10 {
            assert_eq!(classify(&texts), first);
        }
        assert_eq!(first, Sentiment::Positive);
    }
}
