pub mod analysis;
pub mod health;
pub mod prompts;

pub use analysis::{analyze_entries, analyze_entry};
pub use health::service_info;
pub use prompts::{generate_prompt, suggest_topics};

/// First `max_chars` characters of `text`, with a trailing ellipsis when
/// the text was actually cut.
pub(crate) fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::excerpt;

    #[test]
    fn excerpt_leaves_short_text_alone() {
        assert_eq!(excerpt("short entry", 200), "short entry");
    }

    #[test]
    fn excerpt_cuts_and_appends_ellipsis() {
        let text = "a".repeat(250);
        let cut = excerpt(&text, 200);
        assert_eq!(cut, format!("{}...", "a".repeat(200)));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let text = "é".repeat(10);
        assert_eq!(excerpt(&text, 5), format!("{}...", "é".repeat(5)));
    }
}
