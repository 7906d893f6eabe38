// src/lexicon.rs
//! Dictionary membership, used by the matcher to decide which words of a
//! two-word team name are worth searching for on their own ("sydney" from
//! "sydney swans", but not "swans").

use std::collections::HashSet;

pub trait Lexicon: Send + Sync {
    /// True for ordinary dictionary words, false for proper nouns,
    /// abbreviations and anything else unknown.
    fn is_common_word(&self, word: &str) -> bool;
}

impl<F> Lexicon for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_common_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Treats every word as uncommon, so two-word names always split fully.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDictionary;

impl Lexicon for NoDictionary {
    fn is_common_word(&self, _word: &str) -> bool {
        false
    }
}

/// Static word list. Lookups are case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// One word per line; blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    /// Small embedded list of words that show up in club names but carry no
    /// identifying power on their own.
    pub fn builtin() -> Self {
        Self::new(BUILTIN.split_whitespace())
    }

    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl Lexicon for WordList {
    fn is_common_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }
}

const BUILTIN: &str = "
    the of and a an at in on
    north south east west northern southern eastern western central upper lower
    city town county port coast bay island river valley park hill hills heights
    united club football soccer rugby league union association athletic athletics
    sports sport team senior junior women men reserves academy
    royal real national metropolitan district state county
    red blue green gold golden black white silver orange purple maroon
    eagles hawks swans lions tigers bears bulldogs magpies crows cats dogs
    saints demons giants kangaroos power suns dockers blues bombers roosters
    rabbits sharks storm knights dragons panthers raiders titans warriors cowboys
    rovers wanderers rangers victory glory heart fury jets roar phoenix
    stars kings queens chiefs pirates sailors rebels falcons ravens";
