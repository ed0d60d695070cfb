// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which representation a
//! value is written in, and whether hex/decimal input is one number or a
//! sequence of bytes.

use std::fmt;

/// The four representations of a byte value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Repr {
    /// Integers 0–255
    Decimal,
    /// Characters whose code point is the byte value
    Text,
    /// Lowercase hex pairs
    Hex,
    /// 8-character `0`/`1` octets
    Binary,
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Repr::Decimal => "decimal",
            Repr::Text => "text",
            Repr::Hex => "hex",
            Repr::Binary => "binary",
        };
        f.write_str(name)
    }
}

/// How hex and decimal input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// Each hex pair / decimal is an independent, range-checked byte
    #[default]
    PerByte,
    /// The whole input is one unsigned number of arbitrary size
    SingleValue,
}
