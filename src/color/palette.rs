// src/color/palette.rs
use std::collections::{HashMap, HashSet};

use log::debug;

use super::css3::CSS3;
use super::{ColorName, ColorSample, Rgb, SampleSource, TeamColors};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedColor {
    pub name: String,
    pub rgb: Rgb,
}

/// Fixed reference palette. Never empty, so naming a colour always succeeds.
///
/// Nearest-colour lookup is a linear scan, O(palette size) per call; fine
/// for the few hundred entries of a named-colour list.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<NamedColor>,
    exact: HashMap<Rgb, usize>,
}

impl Palette {
    /// Entries keep their given order, which decides distance ties. A hex
    /// value listed twice keeps its first name.
    pub fn new(entries: Vec<NamedColor>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyPalette);
        }
        let mut exact = HashMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            exact.entry(e.rgb).or_insert(i);
        }
        Ok(Self { entries, exact })
    }

    /// The CSS3 named colours.
    pub fn css3() -> Self {
        let entries = CSS3
            .iter()
            .map(|&(hex, name)| NamedColor {
                name: s!(name),
                rgb: Rgb::from_hex(hex).unwrap_or_default(),
            })
            .collect::<Vec<_>>();
        let exact = entries.iter().enumerate().map(|(i, e)| (e.rgb, i)).collect();
        Self { entries, exact }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn entries(&self) -> &[NamedColor] { &self.entries }

    /// Exact name for a palette colour, if there is one.
    pub fn exact_name(&self, rgb: Rgb) -> Option<&str> {
        self.exact.get(&rgb).map(|&i| self.entries[i].name.as_str())
    }

    /// Name of the closest palette entry by squared RGB distance. Ties go
    /// to whichever entry comes first in palette order; that is a stable
    /// choice, not a meaningful one.
    pub fn nearest_color_name(&self, rgb: Rgb) -> &str {
        if let Some(name) = self.exact_name(rgb) {
            return name;
        }
        // entries is non-empty (checked in `new`, constant in `css3`)
        let mut best = &self.entries[0];
        let mut best_d = best.rgb.distance_sq(rgb);
        for e in &self.entries[1..] {
            let d = e.rgb.distance_sq(rgb);
            if d < best_d {
                best = e;
                best_d = d;
            }
        }
        &best.name
    }

    /// The `k` most frequent exact colours in `samples`, named, with
    /// repeated names collapsed. Frequency ties keep first-seen order.
    pub fn top_colors<I>(&self, samples: I, k: usize) -> Vec<ColorName>
    where
        I: IntoIterator<Item = Rgb>,
    {
        // rgb -> (count, first index)
        let mut counts: HashMap<Rgb, (usize, usize)> = HashMap::new();
        for (i, rgb) in samples.into_iter().enumerate() {
            counts.entry(rgb).or_insert((0, i)).0 += 1;
        }

        let mut ranked: Vec<(Rgb, usize, usize)> =
            counts.into_iter().map(|(rgb, (n, first))| (rgb, n, first)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for (rgb, n, _) in ranked.into_iter().take(k) {
            let name = self.nearest_color_name(rgb);
            debug!("top_colors: {} x{n} -> {name}", rgb.to_hex());
            if seen.insert(name) {
                out.push(ColorName { hex: rgb.to_hex(), name: s!(name) });
            }
        }
        out
    }

    /// Kit swatches are each named (all distinct names kept); logo pixels
    /// are reduced to their `k` most frequent colours first.
    pub fn team_colors(&self, samples: &[ColorSample], k: usize) -> TeamColors {
        let of = |src: SampleSource| samples.iter().filter(move |s| s.source == src).map(|s| s.rgb);

        let mut kit = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for rgb in of(SampleSource::Kit) {
            let name = self.nearest_color_name(rgb);
            if seen.insert(name) {
                kit.push(ColorName { hex: rgb.to_hex(), name: s!(name) });
            }
        }

        TeamColors { kit, logo: self.top_colors(of(SampleSource::Logo), k) }
    }
}
