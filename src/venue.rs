// src/venue.rs
//! Venue records and the canonical venue registry.
//!
//! A venue is looked up in the registry by name (and by each of its former
//! names) within its resolved state; every matching registry code is kept.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::sanitize::Normalize;
use crate::core::text::contains_phrase;

/// A venue as scraped, plus what resolution fills in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub name: String,
    /// Former names and aliases.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub known_as: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub codes: BTreeSet<String>,
}

impl VenueRecord {
    pub fn named(name: &str) -> Self {
        Self { name: s!(name), ..Self::default() }
    }

    pub fn at(mut self, location: &str) -> Self {
        self.location = Some(s!(location));
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(s!(url));
        self
    }

    pub fn also_known_as(mut self, alias: &str) -> Self {
        self.known_as.push(s!(alias));
        self
    }
}

/// One row of the venue registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub state: String,
    pub code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueResolution {
    pub state: Option<String>,
    pub codes: BTreeSet<String>,
}

/// The registry with each entry's name normalised once up front.
#[derive(Clone, Debug, Default)]
pub struct VenueRegistry {
    entries: Vec<RegistryEntry>,
    names: Vec<String>,
}

impl VenueRegistry {
    pub fn new(entries: Vec<RegistryEntry>, normalizer: &dyn Normalize) -> Self {
        let names = entries.iter().map(|e| normalizer.normalize(&e.name)).collect();
        Self { entries, names }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.state.as_str())
    }

    /// Codes of entries in `state` (case-insensitive) whose normalised name
    /// contains `name` as whole words. Unnamed entries never match.
    pub fn codes_for<'r>(&'r self, name: &'r str, state: &'r str) -> impl Iterator<Item = &'r str> + 'r {
        self.entries
            .iter()
            .zip(&self.names)
            .filter(move |(e, n)| !n.is_empty() && contains_phrase(n, name) && e.state.eq_ignore_ascii_case(state))
            .map(|(e, _)| e.code.as_str())
    }

    /// Registry codes for `venue` in `state`, searched under its name and
    /// every alias. No state means no codes; so does no registry hit.
    pub fn resolve_codes(
        &self,
        venue: &VenueRecord,
        state: Option<&str>,
        normalizer: &dyn Normalize,
    ) -> VenueResolution {
        let Some(state) = state else {
            debug!("resolve_venue_codes: '{}' has no state, skipping registry", venue.name);
            return VenueResolution::default();
        };

        let mut codes = BTreeSet::new();
        let names = std::iter::once(&venue.name).chain(venue.known_as.iter());
        for raw in names {
            let name = normalizer.normalize(raw);
            codes.extend(self.codes_for(&name, state).map(str::to_string));
        }

        debug!("resolve_venue_codes: '{}' in {state} -> {codes:?}", venue.name);
        VenueResolution { state: Some(s!(state)), codes }
    }
}
