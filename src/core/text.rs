// src/core/text.rs
// Word-level helpers over normalised text (single spaces, no padding).

use std::collections::BTreeSet;

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// All contiguous windows of exactly `n` words.
pub fn ngrams(s: &str, n: usize) -> BTreeSet<String> {
    let words: Vec<&str> = s.split_whitespace().collect();
    if n == 0 || n > words.len() {
        return BTreeSet::new();
    }
    words.windows(n).map(|w| w.join(" ")).collect()
}

/// `needle` occurs in `haystack` as a run of whole words.
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    join!(" ", haystack, " ").contains(&join!(" ", needle, " "))
}

/// Remove every literal occurrence of `part` and re-collapse the spacing.
pub fn strip_literal(s: &str, part: &str) -> String {
    if part.is_empty() {
        return s.to_string();
    }
    super::sanitize::normalize_ws(&s.replace(part, " "))
}

/// First letter of every word: "west coast eagles" → "wce".
pub fn acronym(words: &[&str]) -> String {
    words.iter().filter_map(|w| w.chars().next()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ngrams_slide_over_words() {
        let g = ngrams("the sydney swans won", 2);
        assert_eq!(g, names!["the sydney", "sydney swans", "swans won"]);
        assert!(ngrams("one two", 3).is_empty());
        assert!(ngrams("one two", 0).is_empty());
    }

    #[test]
    fn phrase_match_respects_word_boundaries() {
        assert!(contains_phrase("north sydney oval", "sydney"));
        assert!(contains_phrase("north sydney oval", "north sydney"));
        assert!(!contains_phrase("north sydneyside", "sydney"));
        assert!(!contains_phrase("anything", ""));
    }

    #[test]
    fn strip_literal_collapses_gaps() {
        assert_eq!(strip_literal("the sydney swans won", "sydney swans"), "the won");
        assert_eq!(strip_literal("abc", ""), "abc");
    }

    #[test]
    fn acronym_takes_initials() {
        assert_eq!(acronym(&["west", "coast", "eagles"]), "wce");
    }
}
