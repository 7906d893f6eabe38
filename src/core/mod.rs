// src/core/mod.rs

pub mod html;
pub mod sanitize;
pub mod text;
