// src/lib.rs
//! Fuzzy entity resolution for scraped sports-team metadata.
//!
//! Scraped text fields and pixel samples go in; canonical names come out:
//! team names found in prose (`matcher`), named colours (`color`), a venue's
//! state/region (`region`) and registry venue codes (`venue`). Reference data
//! is loaded once (`store`) and shared read-only through a `Resolver`.

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;

pub mod color;
pub mod lexicon;
pub mod matcher;
pub mod region;
pub mod venue;

pub mod progress;
pub mod resolver;
pub mod runner;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::core::sanitize::{BasicNormalizer, Normalize};
pub use error::{Error, Result};
pub use resolver::Resolver;
