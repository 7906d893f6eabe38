// src/core/sanitize.rs

/// Text canonicalisation applied to every string before it is compared.
///
/// Implementations must be deterministic and idempotent on their own output.
/// Matching only relies on two properties: comparisons on normalised text
/// are case-insensitive, and runs of whitespace/punctuation are collapsed to
/// single spaces.
pub trait Normalize: Send + Sync {
    fn normalize(&self, s: &str) -> String;
}

impl<F> Normalize for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, s: &str) -> String {
        self(s)
    }
}

/// Lowercase ASCII, punctuation to spaces, collapse whitespace. Knows
/// nothing about place-name spellings or stopwords.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicNormalizer;

impl Normalize for BasicNormalizer {
    fn normalize(&self, s: &str) -> String {
        let spaced: String = normalize_entities(s)
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { ' ' })
            .collect();
        normalize_ws(&spaced)
    }
}

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalizer_folds_case_and_punctuation() {
        let n = BasicNormalizer;
        assert_eq!(n.normalize("  Five Dock,  New South-Wales "), "five dock new south wales");
        assert_eq!(n.normalize("St. Kilda&nbsp;Saints"), "st kilda saints");
    }

    #[test]
    fn basic_normalizer_is_idempotent() {
        let n = BasicNormalizer;
        let once = n.normalize("https://en.wikipedia.org/wiki/Five_Dock,_NSW");
        assert_eq!(n.normalize(&once), once);
        assert_eq!(once, "https en wikipedia org wiki five dock nsw");
    }

    #[test]
    fn closures_are_normalizers() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(Normalize::normalize(&upper, "abc"), "ABC");
    }
}
