// src/store.rs
//! Loading the reference datasets from disk.
//!
//! Every loader comes in two halves: `parse_*` works on text already in
//! memory (the `origin` path is only used in error messages), `load_*` reads
//! the file first. Malformed rows fail the whole load; nothing is skipped.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::color::{NamedColor, Palette, Rgb};
use crate::core::sanitize::Normalize;
use crate::error::{Error, Result};
use crate::lexicon::WordList;
use crate::region::Suburb;
use crate::venue::RegistryEntry;

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

fn malformed(origin: &Path, line: u64, reason: impl Into<String>) -> Error {
    Error::Malformed { path: origin.to_path_buf(), line, reason: reason.into() }
}

/* ---------------- palette (JSON) ---------------- */

/// `{ "#rrggbb": "name", ... }`, kept in file order.
pub fn parse_palette(json: &str, origin: &Path) -> Result<Palette> {
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
        .map_err(|source| Error::Json { path: origin.to_path_buf(), source })?;

    let mut entries = Vec::with_capacity(map.len());
    for (i, (hex, name)) in map.into_iter().enumerate() {
        let record = i as u64 + 1;
        let rgb = Rgb::from_hex(&hex).map_err(|e| malformed(origin, record, e.to_string()))?;
        let name = match name {
            serde_json::Value::String(n) if !n.trim().is_empty() => n.trim().to_string(),
            other => return Err(malformed(origin, record, format!("'{hex}' needs a colour name, got {other}"))),
        };
        entries.push(NamedColor { name, rgb });
    }

    Palette::new(entries)
}

pub fn load_palette(path: &Path) -> Result<Palette> {
    let palette = parse_palette(&read_text(path)?, path)?;
    info!("Loaded {} palette colours from {}", palette.len(), path.display());
    Ok(palette)
}

/* ---------------- CSV datasets ---------------- */

#[derive(Deserialize)]
struct SuburbRow {
    name: String,
    state: String,
}

#[derive(Deserialize)]
struct RegistryRow {
    #[serde(default)]
    name: String,
    state: String,
    code: String,
}

/// Deserialize every row of a headed CSV, handing each to `check` together
/// with its line number.
fn parse_rows<T, U, F>(text: &str, origin: &Path, mut check: F) -> Result<Vec<U>>
where
    T: DeserializeOwned,
    F: FnMut(T, u64) -> Result<U>,
{
    let csv_err = |source| Error::Csv { path: origin.to_path_buf(), source };

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(text.as_bytes());
    let headers: StringRecord = reader.headers().map_err(csv_err)?.clone();

    let mut out = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map_or(0, |p| p.line());
        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|e| malformed(origin, line, e.to_string()))?;
        out.push(check(row, line)?);
    }
    Ok(out)
}

/// Suburb CSV with header `name,state`. Both columns are normalised and
/// both must be non-empty afterwards.
pub fn parse_suburbs(text: &str, origin: &Path, normalizer: &dyn Normalize) -> Result<Vec<Suburb>> {
    parse_rows(text, origin, |row: SuburbRow, line| {
        let name = normalizer.normalize(&row.name);
        let state = normalizer.normalize(&row.state);
        if name.is_empty() {
            return Err(malformed(origin, line, "suburb name is empty"));
        }
        if state.is_empty() {
            return Err(malformed(origin, line, format!("suburb '{}' has no state", row.name)));
        }
        Ok(Suburb { name, state })
    })
}

pub fn load_suburbs(path: &Path, normalizer: &dyn Normalize) -> Result<Vec<Suburb>> {
    let suburbs = parse_suburbs(&read_text(path)?, path, normalizer)?;
    info!("Loaded {} suburbs from {}", suburbs.len(), path.display());
    Ok(suburbs)
}

/// Venue registry CSV with header `name,state,code`. State and code are
/// required; a blank name is allowed (such rows never match a venue). The
/// state is normalised so it compares against resolved states.
pub fn parse_registry(text: &str, origin: &Path, normalizer: &dyn Normalize) -> Result<Vec<RegistryEntry>> {
    parse_rows(text, origin, |row: RegistryRow, line| {
        let state = normalizer.normalize(&row.state);
        if state.is_empty() {
            return Err(malformed(origin, line, format!("venue '{}' has no state", row.name)));
        }
        if row.code.is_empty() {
            return Err(malformed(origin, line, format!("venue '{}' has no code", row.name)));
        }
        Ok(RegistryEntry { name: row.name, state, code: row.code })
    })
}

pub fn load_registry(path: &Path, normalizer: &dyn Normalize) -> Result<Vec<RegistryEntry>> {
    let entries = parse_registry(&read_text(path)?, path, normalizer)?;
    info!("Loaded {} registry venues from {}", entries.len(), path.display());
    Ok(entries)
}

/* ---------------- word list ---------------- */

pub fn load_word_list(path: &Path) -> Result<WordList> {
    let words = WordList::parse(&read_text(path)?);
    info!("Loaded {} dictionary words from {}", words.len(), path.display());
    Ok(words)
}

/* ---------------- batch inputs ---------------- */

/// A JSON array of records (venues or teams) for batch resolution.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| Error::Json { path: path.to_path_buf(), source })
}
