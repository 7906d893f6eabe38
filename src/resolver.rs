// src/resolver.rs
//! One read-only bundle of reference data with every resolution operation
//! hung off it. Build it once, share `&Resolver` across threads.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::color::{ColorName, ColorSample, Palette, Rgb, TeamColors};
use crate::config::options::{DataPaths, ResolveOptions};
use crate::core::sanitize::{BasicNormalizer, Normalize};
use crate::error::Result;
use crate::lexicon::{Lexicon, WordList};
use crate::matcher::{CandidateMatcher, MatchResult};
use crate::region::{StateRegions, StateResolver, StateSource, Suburb, SuburbIndex};
use crate::store;
use crate::venue::{RegistryEntry, VenueRecord, VenueRegistry, VenueResolution};

/// A scraped team page: its title plus the prose passages to scan for
/// other teams' names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInput {
    pub name: String,
    #[serde(default)]
    pub passages: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageMatch {
    /// Index into `TeamInput::passages`.
    pub passage: usize,
    pub teams: MatchResult,
    /// More than one name came back.
    pub ambiguous: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMatches {
    pub name: String,
    pub matches: Vec<PassageMatch>,
}

pub struct Resolver {
    normalizer: Box<dyn Normalize>,
    lexicon: Box<dyn Lexicon>,
    palette: Palette,
    suburbs: SuburbIndex,
    registry: VenueRegistry,
    regions: StateRegions,
    options: ResolveOptions,
}

impl Resolver {
    /// Suburb names and all states are run through `normalizer` here, so
    /// hand-built data need not be normalised first.
    pub fn new(
        normalizer: Box<dyn Normalize>,
        lexicon: Box<dyn Lexicon>,
        palette: Palette,
        suburbs: Vec<Suburb>,
        registry: Vec<RegistryEntry>,
        options: ResolveOptions,
    ) -> Self {
        let suburbs = SuburbIndex::new(suburbs.into_iter().map(|s| Suburb {
            name: normalizer.normalize(&s.name),
            state: normalizer.normalize(&s.state),
        }));
        let registry = registry
            .into_iter()
            .map(|e| RegistryEntry { state: normalizer.normalize(&e.state), ..e })
            .collect();
        let registry = VenueRegistry::new(registry, normalizer.as_ref());
        let regions = StateRegions::new(
            suburbs.states().chain(registry.states()).map(str::to_string),
        );

        if regions.is_empty() {
            warn!("Resolver: no states known, venue resolution will find nothing");
        }

        Self { normalizer, lexicon, palette, suburbs, registry, regions, options }
    }

    /// Load whatever `paths` names; anything missing falls back to the
    /// CSS3 palette, the built-in word list, or an empty registry.
    pub fn load(paths: &DataPaths, options: ResolveOptions) -> Result<Self> {
        let normalizer = BasicNormalizer;

        let palette = match &paths.palette {
            Some(p) => store::load_palette(p)?,
            None => Palette::css3(),
        };
        let lexicon = match &paths.words {
            Some(p) => store::load_word_list(p)?,
            None => WordList::builtin(),
        };
        let suburbs = match &paths.suburbs {
            Some(p) => store::load_suburbs(p, &normalizer)?,
            None => Vec::new(),
        };
        let registry = match &paths.registry {
            Some(p) => store::load_registry(p, &normalizer)?,
            None => Vec::new(),
        };

        let resolver = Self::new(
            Box::new(normalizer),
            Box::new(lexicon),
            palette,
            suburbs,
            registry,
            options,
        );
        info!(
            "Resolver ready: {} colours, {} suburbs, {} venues, {} states",
            resolver.palette.len(),
            resolver.suburbs.len(),
            resolver.registry.len(),
            resolver.regions.len(),
        );
        Ok(resolver)
    }

    pub fn options(&self) -> &ResolveOptions { &self.options }
    pub fn palette(&self) -> &Palette { &self.palette }
    pub fn regions(&self) -> &StateRegions { &self.regions }

    pub fn normalize(&self, s: &str) -> String {
        self.normalizer.normalize(s)
    }

    /* ---------------- teams ---------------- */

    /// Which of `candidates` the passage mentions. Both sides are
    /// normalised; the result holds the candidates as given.
    pub fn match_team<I, S>(&self, candidates: I, passage: &str) -> Option<MatchResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keyed = candidates.into_iter().map(|c| {
            let c = c.as_ref();
            (self.normalize(c), s!(c))
        });
        let matcher = CandidateMatcher::with_options(self.lexicon.as_ref(), self.options.matcher);
        matcher.find_aliased(keyed, &self.normalize(passage))
    }

    /// Every passage of `team` that mentions one of `candidates`.
    pub fn match_passages(&self, team: &TeamInput, candidates: &[String]) -> TeamMatches {
        let matches = team
            .passages
            .iter()
            .enumerate()
            .filter_map(|(i, text)| {
                let teams = self.match_team(candidates, text)?;
                Some(PassageMatch { passage: i, ambiguous: teams.len() > 1, teams })
            })
            .collect();
        TeamMatches { name: team.name.clone(), matches }
    }

    /* ---------------- colours ---------------- */

    pub fn nearest_color_name(&self, rgb: Rgb) -> &str {
        self.palette.nearest_color_name(rgb)
    }

    pub fn top_colors<I>(&self, samples: I) -> Vec<ColorName>
    where
        I: IntoIterator<Item = Rgb>,
    {
        self.palette.top_colors(samples, self.options.colors.top_k)
    }

    pub fn team_colors(&self, samples: &[ColorSample]) -> TeamColors {
        self.palette.team_colors(samples, self.options.colors.top_k)
    }

    /* ---------------- venues ---------------- */

    fn states(&self) -> StateResolver<'_> {
        StateResolver::new(&self.regions, &self.suburbs, self.normalizer.as_ref())
    }

    pub fn resolve_state(&self, venue: &VenueRecord) -> Option<String> {
        self.states().resolve_state(venue)
    }

    pub fn resolve_state_with_source(&self, venue: &VenueRecord) -> Option<(String, StateSource)> {
        self.states().resolve_state_with_source(venue)
    }

    pub fn resolve_venue_codes(&self, venue: &VenueRecord) -> VenueResolution {
        let state = self.resolve_state(venue);
        self.registry.resolve_codes(venue, state.as_deref(), self.normalizer.as_ref())
    }

    /// Fill in `venue.state` and `venue.codes`.
    pub fn resolve_venue(&self, venue: &mut VenueRecord) {
        let VenueResolution { state, codes } = self.resolve_venue_codes(venue);
        venue.state = state;
        venue.codes = codes;
    }
}

impl Default for Resolver {
    /// CSS3 palette, built-in word list, no suburbs, no registry.
    fn default() -> Self {
        Self::new(
            Box::new(BasicNormalizer),
            Box::new(WordList::builtin()),
            Palette::css3(),
            Vec::new(),
            Vec::new(),
            ResolveOptions::default(),
        )
    }
}
