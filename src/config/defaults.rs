// src/config/defaults.rs
use crate::config::app::{Format, Input};
use crate::consts::DEFAULT_SEPARATOR;

pub fn default_format() -> Format {
    Format {
        separator: DEFAULT_SEPARATOR.into(),
    }
}

pub fn default_input() -> Input {
    Input { trim: true }
}
