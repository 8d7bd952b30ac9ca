//! Parse generated text into discrete ideas
//!
//! Generated idea lists follow a numbered-list convention ("1. ... 2. ...").
//! Full posts are passed through untouched - the distinction is structural,
//! not textual.

use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiter between ideas: a number followed by a period
static IDEA_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.").unwrap());

/// Split raw generated text into a list of ideas.
///
/// The segment before the first delimiter (the model's preamble) is
/// discarded; each remaining segment is trimmed and empty segments are
/// dropped. Relative order is preserved. Total: malformed input degrades
/// to an empty list.
pub fn parse_ideas(raw_text: &str) -> Vec<String> {
    IDEA_DELIMITER
        .split(raw_text)
        .skip(1)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

/// Normalize raw generated text into a full post: identity pass-through.
pub fn parse_post(raw_text: &str) -> String {
    raw_text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ideas_discards_preamble() {
        let ideas = parse_ideas("Intro text 1. First idea 2. Second idea");
        assert_eq!(ideas, vec!["First idea", "Second idea"]);
    }

    #[test]
    fn test_parse_ideas_empty_input() {
        assert!(parse_ideas("").is_empty());
    }

    #[test]
    fn test_parse_ideas_no_delimiters() {
        assert!(parse_ideas("Just some plain text without numbering").is_empty());
    }

    #[test]
    fn test_parse_ideas_trims_and_drops_blank_segments() {
        let ideas = parse_ideas("1.   First idea  \n2.\n3. Third idea");
        assert_eq!(ideas, vec!["First idea", "Third idea"]);
    }

    #[test]
    fn test_parse_ideas_preserves_order() {
        let ideas = parse_ideas("1. alpha 2. bravo 3. charlie");
        assert_eq!(ideas, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_parse_ideas_multiline_segments() {
        let raw = "Here are your ideas:\n1. Share a war story\nwith a lesson\n2. Run a poll";
        let ideas = parse_ideas(raw);
        assert_eq!(ideas.len(), 2);
        assert!(ideas[0].contains("war story"));
        assert!(ideas[0].contains("with a lesson"));
    }

    #[test]
    fn test_parse_ideas_multi_digit_numbering() {
        let raw = (1..=12)
            .map(|i| format!("{}. Idea number {}", i, i))
            .collect::<Vec<_>>()
            .join(" ");
        let ideas = parse_ideas(&raw);
        assert_eq!(ideas.len(), 12);
        // "number N" fragments survive because only "N." sequences delimit
        assert!(ideas[11].contains("12"));
    }

    #[test]
    fn test_parse_post_is_identity() {
        for text in ["", "plain", "1. looks like a list 2. but is a post"] {
            assert_eq!(parse_post(text), text);
        }
    }
}
