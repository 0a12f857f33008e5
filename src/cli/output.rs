//! Output formatting utilities for the CLI.

use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Truncate a string to a maximum byte length, appending "..." if truncated.
///
/// The cut never lands inside a multi-byte character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut cut = max_len.saturating_sub(3);
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title here", 10), "a longe...");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // Conversation titles can be arbitrary UTF-8.
        let title = "a日本語のタイトルが長すぎる場合のテスト";
        let truncated = truncate(title, 30);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 30);
        assert!(title.starts_with(truncated.trim_end_matches("...")));

        // Cutting right at a boundary keeps the full leading character.
        assert_eq!(truncate("日本語", 6), "日...");
    }
}
