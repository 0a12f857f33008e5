//! Static phrase tables used by the heuristic detectors.
//!
//! Process-wide, read-only vocabulary. All lookups are case-insensitive
//! substring checks against already lower-cased phrases; there is no
//! tokenization or stemming.

/// Phrases indicating the AI is unable to help ("giving up").
pub static FALLBACK_PHRASES: &[&str] = &[
    "i don't know",
    "i am sorry, i cannot assist",
    "i cannot answer that",
    "i am not able to help",
    "i'm not sure",
];

/// Phrases indicating the user wants a human.
pub static ESCALATION_PHRASES: &[&str] = &[
    "human",
    "agent",
    "talk to a person",
    "live support",
    "escalate",
    "representative",
];

/// Phrases indicating the user considers the issue solved.
pub static RESOLUTION_PHRASES: &[&str] = &[
    "thanks",
    "thank you",
    "resolved",
    "fixed",
    "that helps",
    "perfect",
    "awesome",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_are_lowercase() {
        for phrase in FALLBACK_PHRASES
            .iter()
            .chain(ESCALATION_PHRASES)
            .chain(RESOLUTION_PHRASES)
        {
            assert_eq!(
                *phrase,
                phrase.to_lowercase(),
                "lexicon entries must be lower-cased: {phrase}"
            );
        }
    }
}
