// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;

use thiserror::Error;

use crate::aliases::Decimal;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Decimal value must be between 0-255: {0}")]
    DecimalOutOfRange(Decimal),

    #[error("Binary string must be 8 bits with only 0s and 1s: '{0}'")]
    InvalidBinary(String),

    #[error("Invalid hex string: '{input}' ({source})")]
    InvalidHex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Hex string must have an even number of digits: '{0}'")]
    OddHexLength(String),

    #[error("Invalid decimal value: '{0}'")]
    InvalidDecimal(String),

    #[error("Failed to read file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConversionError {
    pub(crate) fn invalid_hex(input: &str, source: hex::FromHexError) -> Self {
        match source {
            hex::FromHexError::OddLength => ConversionError::OddHexLength(input.to_owned()),
            source => ConversionError::InvalidHex {
                input: input.to_owned(),
                source,
            },
        }
    }
}
