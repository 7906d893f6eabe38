// src/matcher.rs
//! Finds which canonical names from a small candidate set occur in a
//! passage of prose.
//!
//! Matching is progressive, most specific first:
//! 1. slide a window as wide as the longest remaining candidate over the
//!    passage and look for verbatim hits;
//! 2. retry the leftovers at Levenshtein distance 1, then 2;
//! 3. shrink the widest candidates (drop one word, or keep only the
//!    non-dictionary words of two-word names, or use the acronym) and start
//!    over with a narrower window.
//!
//! With `early_exit` on, the search stops the moment a second distinct name
//! is found and returns what it has. It also stops, adding nothing, at a
//! shared variant whose owners would not fit in two names.
//!
//! Both candidates and passage are expected to be normalised already.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use log::debug;
use strsim::levenshtein;

use crate::config::options::MatcherOptions;
use crate::core::text;
use crate::lexicon::Lexicon;

/// Canonical names judged present in a passage.
pub type MatchResult = BTreeSet<String>;

/// Search key → the canonical names it stands for. Shrunk variants may stand
/// for several names ("sydney" from both "sydney swans" and "sydney fc").
type Pool = BTreeMap<String, BTreeSet<String>>;

enum Flow {
    Continue,
    Stop,
}

pub struct CandidateMatcher<'a> {
    lexicon: &'a dyn Lexicon,
    options: MatcherOptions,
}

impl<'a> CandidateMatcher<'a> {
    pub fn new(lexicon: &'a dyn Lexicon) -> Self {
        Self { lexicon, options: MatcherOptions::default() }
    }

    pub fn with_options(lexicon: &'a dyn Lexicon, options: MatcherOptions) -> Self {
        Self { lexicon, options }
    }

    /// Candidates are their own canonical names.
    pub fn find_team<I, S>(&self, candidates: I, passage: &str) -> Option<MatchResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.find_aliased(
            candidates.into_iter().map(|c| {
                let c = c.as_ref().to_string();
                (c.clone(), c)
            }),
            passage,
        )
    }

    /// Candidates as `(search key, canonical name)` pairs, e.g. a normalised
    /// spelling searched for but the display spelling reported.
    pub fn find_aliased<I>(&self, candidates: I, passage: &str) -> Option<MatchResult>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut pool = Pool::new();
        for (key, canonical) in candidates {
            let key = crate::core::sanitize::normalize_ws(&key);
            if !key.is_empty() {
                pool.entry(key).or_default().insert(canonical);
            }
        }

        let mut passage = crate::core::sanitize::normalize_ws(passage);
        let mut found = MatchResult::new();

        // Each pass strictly lowers `width`, so this always terminates.
        'search: loop {
            let Some(width) = pool.keys().map(|k| text::word_count(k)).max() else { break };
            if width == 0 || width > text::word_count(&passage) {
                break;
            }

            let mut windows = text::ngrams(&passage, width);
            for distance in 0..=self.options.max_edit_distance {
                if let Flow::Stop = self.round(distance, &mut pool, &mut windows, &mut passage, &mut found) {
                    debug!("find_team: stopped early after round {distance}: {found:?}");
                    break 'search;
                }
            }

            if width == 1 {
                break;
            }
            pool = self.shrink(pool, width);
        }

        if found.is_empty() { None } else { Some(found) }
    }

    /// One pass over the pool at a fixed edit distance. Consumed keys and
    /// windows are removed only once the pass is over.
    fn round(
        &self,
        distance: usize,
        pool: &mut Pool,
        windows: &mut BTreeSet<String>,
        passage: &mut String,
        found: &mut MatchResult,
    ) -> Flow {
        let mut used_keys: Vec<String> = Vec::new();
        let mut used_windows: BTreeSet<String> = BTreeSet::new();

        for (key, names) in pool.iter() {
            if distance == 0 {
                if windows.contains(key) {
                    debug!("find_team: exact '{key}'");
                    if self.accept(names, found) {
                        return Flow::Stop;
                    }
                    used_keys.push(key.clone());
                    used_windows.insert(key.clone());
                    *passage = text::strip_literal(passage, key);
                }
            } else {
                for window in windows.iter() {
                    if levenshtein(key, window) == distance {
                        debug!("find_team: '{key}' ~ '{window}' (distance {distance})");
                        if self.accept(names, found) {
                            return Flow::Stop;
                        }
                        used_keys.push(key.clone());
                        used_windows.insert(window.clone());
                    }
                }
            }
        }

        for key in &used_keys {
            pool.remove(key);
        }
        windows.retain(|w| !used_windows.contains(w));
        Flow::Continue
    }

    /// Record every owner of a hit at once; true when the search must stop.
    /// Under early exit a hit whose new owners would push the result past
    /// two names stops the search without adding any of them, so no owner
    /// is ever picked by sort order alone.
    fn accept(&self, names: &BTreeSet<String>, found: &mut MatchResult) -> bool {
        let fresh: Vec<&String> = names.iter().filter(|n| !found.contains(*n)).collect();
        if self.options.early_exit && fresh.len() > 1 && found.len() + fresh.len() > 2 {
            debug!("find_team: {fresh:?} share one variant, stopping at {found:?}");
            return true;
        }
        found.extend(fresh.into_iter().cloned());
        self.options.early_exit && found.len() > 1
    }

    /// Rewrite every `width`-word key into narrower variants; narrower keys
    /// pass through untouched.
    fn shrink(&self, pool: Pool, width: usize) -> Pool {
        let mut next = Pool::new();
        let mut add = |key: String, names: &BTreeSet<String>| {
            if !key.is_empty() {
                next.entry(key).or_default().extend(names.iter().cloned());
            }
        };

        for (key, names) in &pool {
            let words: Vec<&str> = key.split_whitespace().collect();
            if words.len() < width {
                add(key.clone(), names);
            } else if width == 2 {
                for w in words.iter().filter(|w| !self.lexicon.is_common_word(w)) {
                    add(w.to_string(), names);
                }
            } else {
                for combo in words.iter().copied().combinations(width - 1) {
                    add(combo.join(" "), names);
                }
                add(text::acronym(&words), names);
            }
        }

        debug!("find_team: shrunk to {} keys below width {width}", next.len());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{NoDictionary, WordList};

    fn matcher(lex: &dyn Lexicon) -> CandidateMatcher<'_> {
        CandidateMatcher::new(lex)
    }

    #[test]
    fn exact_window_hit() {
        let lex = WordList::builtin();
        let got = matcher(&lex).find_team(names!["sydney swans", "west coast"], "the sydney swans won");
        assert_eq!(got, Some(names!["sydney swans"]));
    }

    #[test]
    fn no_candidates_or_passage() {
        let lex = NoDictionary;
        assert_eq!(matcher(&lex).find_team(names![], "anything at all"), None);
        assert_eq!(matcher(&lex).find_team(names!["sydney swans"], ""), None);
    }

    #[test]
    fn candidate_wider_than_passage_is_absent() {
        let lex = NoDictionary;
        assert_eq!(matcher(&lex).find_team(names!["greater western sydney giants"], "gws won"), None);
    }

    #[test]
    fn edit_distance_rounds_catch_typos() {
        let lex = NoDictionary;
        let m = matcher(&lex);
        assert_eq!(m.find_team(names!["collingwood"], "colingwood by ten"), Some(names!["collingwood"]));
        assert_eq!(m.find_team(names!["collingwood"], "colinwood by ten"), Some(names!["collingwood"]));
        assert_eq!(m.find_team(names!["collingwood"], "clinwod by ten"), None);
    }

    #[test]
    fn two_word_names_fall_back_to_uncommon_words() {
        let lex = WordList::builtin();
        let got = matcher(&lex).find_team(names!["sydney swans"], "sydney beat them");
        assert_eq!(got, Some(names!["sydney swans"]));

        // "swans" alone is a dictionary word and is not searched for
        assert_eq!(matcher(&lex).find_team(names!["sydney swans"], "the swans flew off"), None);
    }

    #[test]
    fn longer_names_fall_back_to_subsequences_and_acronyms() {
        let lex = WordList::builtin();
        let m = matcher(&lex);
        let cands = names!["west coast eagles"];
        assert_eq!(m.find_team(&cands, "the west eagles lost"), Some(names!["west coast eagles"]));
        assert_eq!(m.find_team(&cands, "wce lost again"), Some(names!["west coast eagles"]));
    }

    #[test]
    fn early_exit_stops_at_second_name() {
        let lex = NoDictionary;
        let cands = names!["adelaide", "brisbane", "carlton"];
        let got = matcher(&lex).find_team(&cands, "adelaide brisbane and carlton played");
        let got = got.unwrap_or_default();
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn complete_mode_keeps_going() {
        let lex = NoDictionary;
        let cands = names!["adelaide", "brisbane", "carlton"];
        let m = CandidateMatcher::with_options(&lex, MatcherOptions::complete());
        let got = m.find_team(&cands, "adelaide brisbane and carlton played");
        assert_eq!(got, Some(cands));
    }

    #[test]
    fn shared_variant_reports_every_owner() {
        let lex = NoDictionary;
        let m = CandidateMatcher::with_options(&lex, MatcherOptions::complete());
        let got = m.find_team(names!["sydney swans", "sydney fc"], "sydney won");
        assert_eq!(got, Some(names!["sydney fc", "sydney swans"]));
    }

    #[test]
    fn shared_variant_never_picks_one_owner() {
        let lex = NoDictionary;
        let cands = names!["sydney swans", "sydney fc", "carlton"];
        let got = matcher(&lex).find_team(&cands, "carlton beat sydney");
        assert_eq!(got, Some(names!["carlton"]));

        let m = CandidateMatcher::with_options(&lex, MatcherOptions::complete());
        assert_eq!(m.find_team(&cands, "carlton beat sydney"), Some(cands.clone()));
    }

    #[test]
    fn shared_variant_alone_reports_both_owners() {
        let lex = NoDictionary;
        let got = matcher(&lex).find_team(names!["sydney swans", "sydney fc"], "sydney won");
        assert_eq!(got, Some(names!["sydney fc", "sydney swans"]));
    }

    #[test]
    fn exact_hit_consumes_its_text() {
        let lex = NoDictionary;
        let m = CandidateMatcher::with_options(&lex, MatcherOptions::complete());
        let got = m.find_team(names!["north melbourne", "melbourne"], "north melbourne won");
        assert_eq!(got, Some(names!["north melbourne"]));
    }

    #[test]
    fn aliased_keys_report_canonical_names() {
        let lex = NoDictionary;
        let got = matcher(&lex).find_aliased(
            vec![(s!("st kilda"), s!("St Kilda Saints"))],
            "st kilda by a point",
        );
        assert_eq!(got, Some(names!["St Kilda Saints"]));
    }

    #[test]
    fn single_letter_candidates_terminate() {
        let lex = NoDictionary;
        assert_eq!(matcher(&lex).find_team(names!["x"], "nothing here whatsoever"), None);
    }
}
