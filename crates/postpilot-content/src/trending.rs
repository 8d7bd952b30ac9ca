//! Trending-term extraction over scraped post text
//!
//! A naive term-frequency ranking: no stemming, no NLP. Good enough to
//! bias a prompt, deliberately nothing more.

use std::collections::HashMap;

/// Maximum number of trending terms returned
pub const MAX_TRENDING_TERMS: usize = 5;

/// Common words excluded from frequency counting
const STOP_WORDS: [&str; 11] = [
    "the", "and", "a", "to", "of", "in", "is", "that", "for", "on", "with",
];

/// Rank the most frequent qualifying terms across `documents`.
///
/// Concatenates the documents, lowercases, tokenizes on whitespace runs,
/// and discards tokens of length <= 3 and stop words. The result is
/// ordered by descending frequency with ties broken by first occurrence,
/// capped at [`MAX_TRENDING_TERMS`]. Pure and deterministic; empty or
/// all-filtered input yields an empty vector with no padding.
pub fn extract_trending_terms(documents: &[String]) -> Vec<String> {
    let text = documents.join(" ").to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in text.split_whitespace() {
        if token.chars().count() <= 3 || STOP_WORDS.contains(&token) {
            continue;
        }
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // Stable sort over insertion order: ties keep first-occurrence order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(MAX_TRENDING_TERMS);

    order.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_trending_terms(&[]).is_empty());
        assert!(extract_trending_terms(&docs(&[""])).is_empty());
    }

    #[test]
    fn test_short_and_stop_words_discarded() {
        let result = extract_trending_terms(&docs(&["the cat sat", "the cat sat"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_frequency_ordering() {
        let result =
            extract_trending_terms(&docs(&["engineering engineering design design design"]));
        assert_eq!(result, vec!["design", "engineering"]);
    }

    #[test]
    fn test_fewer_than_cap_returns_exactly_that_many() {
        let result = extract_trending_terms(&docs(&["kubernetes kubernetes rust"]));
        assert_eq!(result, vec!["kubernetes", "rust"]);
    }

    #[test]
    fn test_cap_at_five() {
        let result = extract_trending_terms(&docs(&[
            "alpha bravo charlie delta echo foxtrot golf",
        ]));
        assert_eq!(result.len(), MAX_TRENDING_TERMS);
    }

    #[test]
    fn test_ties_broken_by_first_occurrence() {
        let result = extract_trending_terms(&docs(&["zebra apple zebra apple mango"]));
        // zebra and apple both appear twice; zebra was seen first
        assert_eq!(result, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_case_folding_merges_counts() {
        let result = extract_trending_terms(&docs(&["Rust RUST rust python"]));
        assert_eq!(result, vec!["rust", "python"]);
    }

    #[test]
    fn test_counts_across_documents() {
        let result = extract_trending_terms(&docs(&["hiring remote", "remote teams"]));
        assert_eq!(result[0], "remote");
    }
}
