//! Heuristic detectors over message text.
//!
//! Pure functions operating on lower-cased text with substring containment
//! against the static lexicons. Deterministic for identical input.

use crate::services::lexicons::{ESCALATION_PHRASES, FALLBACK_PHRASES, RESOLUTION_PHRASES};

/// Does the conversation appear resolved?
///
/// Inspects only the single most recent message of the full transcript,
/// regardless of sender. Returns false on an empty transcript.
pub fn is_resolved(all_texts: &[&str]) -> bool {
    let Some(last) = all_texts.last() else {
        return false;
    };
    let last = last.to_lowercase();
    RESOLUTION_PHRASES.iter().any(|phrase| last.contains(phrase))
}

/// Did the user try to escalate to a human at any point?
///
/// Scans every user-authored message; returns false when there are none.
pub fn needs_escalation(user_texts: &[&str]) -> bool {
    user_texts.iter().any(|text| {
        let text = text.to_lowercase();
        ESCALATION_PHRASES.iter().any(|phrase| text.contains(phrase))
    })
}

/// How often did the AI fall back to an "I can't help" phrase?
///
/// Counts once for every (message, phrase) pair that matches: a single
/// message containing two distinct fallback phrases contributes 2.
pub fn count_fallbacks(ai_texts: &[&str]) -> u32 {
    ai_texts
        .iter()
        .map(|text| {
            let text = text.to_lowercase();
            FALLBACK_PHRASES
                .iter()
                .filter(|phrase| text.contains(*phrase))
                .count() as u32
        })
        .sum()
}
