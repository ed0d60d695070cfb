// src/config/mod.rs
//! Configuration system for ctf-converter
//!
//! Central, lazy-loaded global config from TOML, located through
//! `CTFC_CONFIG`. Every field has a built-in default.

pub use app::{load, load_from, Config, Format, Input};

mod app;
mod defaults;
