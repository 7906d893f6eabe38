// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveOptions {
    pub matcher: MatcherOptions,
    pub colors: ColorOptions,
    pub workers: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            matcher: MatcherOptions::default(),
            colors: ColorOptions::default(),
            workers: WORKERS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Stop as soon as a passage yields a second distinct name.
    /// Existing outputs depend on this; turn it off for complete resolution.
    pub early_exit: bool,
    /// Highest Levenshtein distance tried after the exact round.
    pub max_edit_distance: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            early_exit: EARLY_EXIT,
            max_edit_distance: MAX_EDIT_DISTANCE,
        }
    }
}

impl MatcherOptions {
    pub fn complete() -> Self {
        Self { early_exit: false, ..Self::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorOptions {
    /// How many of the most frequent sampled colours to name.
    pub top_k: usize,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self { top_k: TOP_COLORS }
    }
}

/// Where the reference datasets live. `None` means "use the built-in
/// fallback" (CSS3 palette, small word list) or "empty" for the registries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataPaths {
    pub palette: Option<PathBuf>,
    pub suburbs: Option<PathBuf>,
    pub registry: Option<PathBuf>,
    pub words: Option<PathBuf>,
}

impl DataPaths {
    /// Pick up the conventional file names from `dir`, skipping missing ones.
    pub fn from_dir(dir: &Path) -> Self {
        let existing = |name: &str| {
            let p = dir.join(name);
            p.is_file().then_some(p)
        };
        Self {
            palette: existing(PALETTE_FILE),
            suburbs: existing(SUBURBS_FILE),
            registry: existing(VENUES_FILE),
            words: existing(WORDS_FILE),
        }
    }
}
