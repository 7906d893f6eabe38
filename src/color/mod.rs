// src/color/mod.rs
//! Colour naming for kit swatches and logo pixels.

mod css3;
mod palette;
mod samples;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use palette::{NamedColor, Palette};
pub use samples::{samples_from_image, samples_from_styles};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` or `#rgb`, any case, leading `#` optional.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let bad = || Error::InvalidHex(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
        match digits.len() {
            6 => Ok(Self::new(channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?)),
            3 => {
                let twice = |i: usize| channel(&digits[i..i + 1].repeat(2));
                Ok(Self::new(twice(0)?, twice(1)?, twice(2)?))
            }
            _ => Err(bad()),
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Sum of squared per-channel differences.
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| {
            let x = a as i32 - b as i32;
            (x * x) as u32
        };
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleSource {
    /// Kit swatch declared in markup.
    Kit,
    /// Pixel of a logo image.
    Logo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSample {
    pub rgb: Rgb,
    pub source: SampleSource,
}

impl ColorSample {
    pub fn kit(rgb: Rgb) -> Self { Self { rgb, source: SampleSource::Kit } }
    pub fn logo(rgb: Rgb) -> Self { Self { rgb, source: SampleSource::Logo } }
}

/// A sampled colour and the palette name it resolved to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorName {
    pub hex: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColors {
    pub kit: Vec<ColorName>,
    pub logo: Vec<ColorName>,
}
