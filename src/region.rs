// src/region.rs
//! Works out which state/region a venue sits in.
//!
//! Signals are tried in order of reliability, stopping at the first hit:
//! region names in the location text, region names in the source URL, a
//! suburb named in the location, a suburb named in one of the venue's
//! aliases. Everything here works on normalised text.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;

use crate::core::sanitize::Normalize;
use crate::core::text::contains_phrase;
use crate::venue::VenueRecord;

/// The closed set of region labels (normalised), e.g. "new south wales".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateRegions {
    labels: BTreeSet<String>,
}

impl StateRegions {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels
            .into_iter()
            .map(Into::into)
            .filter(|l: &String| !l.is_empty())
            .collect();
        Self { labels }
    }

    pub fn contains(&self, label: &str) -> bool { self.labels.contains(label) }
    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.labels.iter().map(String::as_str) }

    /// First label (in sorted order) whose words occur as a whole-word run
    /// in `text`. Input is expected to name at most one region; when it
    /// names several, the sorted order makes the pick deterministic.
    pub fn find_in(&self, text: &str) -> Option<&str> {
        self.iter().find(|label| contains_phrase(text, label))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Suburb {
    pub name: String,
    pub state: String,
}

/// Suburbs bucketed by the first character of their (normalised) name.
#[derive(Clone, Debug, Default)]
pub struct SuburbIndex {
    by_first: HashMap<char, Vec<Suburb>>,
    count: usize,
}

impl SuburbIndex {
    /// Names and states must already be normalised; empty names are dropped.
    pub fn new<I>(suburbs: I) -> Self
    where
        I: IntoIterator<Item = Suburb>,
    {
        let mut by_first: HashMap<char, Vec<Suburb>> = HashMap::with_capacity(32);
        let mut count = 0;
        for s in suburbs {
            if let Some(fc) = s.name.chars().next() {
                by_first.entry(fc).or_default().push(s);
                count += 1;
            }
        }
        Self { by_first, count }
    }

    pub fn len(&self) -> usize { self.count }
    pub fn is_empty(&self) -> bool { self.count == 0 }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.by_first.values().flatten().map(|s| s.state.as_str())
    }

    /// Every suburb named (as whole words) in `text`, in scan order.
    pub fn find_all(&self, text: &str) -> Vec<&Suburb> {
        let mut hits: Vec<&Suburb> = Vec::new();
        let mut seen: HashSet<&Suburb> = HashSet::new();
        let mut searched: HashSet<char> = HashSet::new();

        for word in text.split_whitespace() {
            let Some(fc) = word.chars().next() else { continue };
            if !searched.insert(fc) {
                continue;
            }
            let Some(bucket) = self.by_first.get(&fc) else { continue };
            for s in bucket {
                if contains_phrase(text, &s.name) && seen.insert(s) {
                    hits.push(s);
                }
            }
        }
        hits
    }

    /// The suburb `text` refers to: the only hit, or among several the one
    /// with the most words in its name ("north sydney" over "sydney"). Equal
    /// word counts keep the first hit.
    pub fn lookup(&self, text: &str) -> Option<&Suburb> {
        let hits = self.find_all(text);
        let mut best: Option<&Suburb> = None;
        for s in hits {
            let words = s.name.split_whitespace().count();
            match best {
                Some(b) if b.name.split_whitespace().count() >= words => {}
                _ => best = Some(s),
            }
        }
        best
    }
}

/// Which signal settled the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateSource {
    Location,
    Url,
    Suburb,
    Alias,
}

pub struct StateResolver<'a> {
    regions: &'a StateRegions,
    suburbs: &'a SuburbIndex,
    normalizer: &'a dyn Normalize,
}

impl<'a> StateResolver<'a> {
    pub fn new(regions: &'a StateRegions, suburbs: &'a SuburbIndex, normalizer: &'a dyn Normalize) -> Self {
        Self { regions, suburbs, normalizer }
    }

    pub fn resolve_state(&self, venue: &VenueRecord) -> Option<String> {
        self.resolve_state_with_source(venue).map(|(state, _)| state)
    }

    pub fn resolve_state_with_source(&self, venue: &VenueRecord) -> Option<(String, StateSource)> {
        let norm = |s: &str| self.normalizer.normalize(s);
        let location = venue.location.as_deref().map(norm);

        let found = location
            .as_deref()
            .and_then(|loc| self.regions.find_in(loc))
            .map(|s| (s.to_string(), StateSource::Location))
            .or_else(|| {
                let url = norm(venue.url.as_deref()?);
                self.regions.find_in(&url).map(|s| (s.to_string(), StateSource::Url))
            })
            .or_else(|| {
                self.suburb_state(location.as_deref()?)
                    .map(|s| (s, StateSource::Suburb))
            })
            .or_else(|| {
                venue
                    .known_as
                    .iter()
                    .find_map(|alias| self.suburb_state(&norm(alias)))
                    .map(|s| (s, StateSource::Alias))
            });

        match &found {
            Some((state, src)) => debug!("resolve_state: '{}' -> {state} via {src:?}", venue.name),
            None => debug!("resolve_state: '{}' unresolved", venue.name),
        }
        found
    }

    fn suburb_state(&self, text: &str) -> Option<String> {
        let s = self.suburbs.lookup(text)?;
        // only states in the region set are valid answers
        self.regions.contains(&s.state).then(|| s.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suburb(name: &str, state: &str) -> Suburb {
        Suburb { name: s!(name), state: s!(state) }
    }

    #[test]
    fn regions_match_whole_words() {
        let r = StateRegions::new(["new south wales", "victoria", "wa"]);
        assert_eq!(r.find_in("five dock new south wales"), Some("new south wales"));
        assert_eq!(r.find_in("perth wa 6000"), Some("wa"));
        assert_eq!(r.find_in("wallaby park"), None);
    }

    #[test]
    fn co_occurring_regions_pick_sorted_first() {
        let r = StateRegions::new(["victoria", "new south wales"]);
        assert_eq!(r.find_in("albury new south wales near victoria"), Some("new south wales"));
    }

    #[test]
    fn longest_suburb_name_wins() {
        let idx = SuburbIndex::new([
            suburb("sydney", "new south wales"),
            suburb("north sydney", "new south wales"),
            suburb("north", "queensland"),
        ]);
        assert_eq!(idx.len(), 3);
        let hit = idx.lookup("north sydney oval").unwrap();
        assert_eq!(hit.name, "north sydney");
        assert_eq!(idx.find_all("north sydney oval").len(), 3);
    }

    #[test]
    fn equal_length_suburbs_keep_first_hit() {
        let idx = SuburbIndex::new([suburb("richmond", "victoria"), suburb("richmond", "new south wales")]);
        assert_eq!(idx.lookup("richmond oval").unwrap().state, "victoria");
    }

    #[test]
    fn suburb_needs_word_boundary() {
        let idx = SuburbIndex::new([suburb("kew", "victoria")]);
        assert!(idx.lookup("kewdale park").is_none());
        assert!(idx.lookup("kew park").is_some());
    }
}
