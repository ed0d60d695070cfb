// src/core/text.rs
//! Conversions from text, using decimal as the pivot

use crate::aliases::{Decimal, Octet};
use crate::core::primitives::{byte_to_octet, char_to_code};
use crate::core::Result;
use crate::error::ConversionError;

/// Text → code points, with surrounding newlines stripped
///
/// Code points are not limited to 0–255 here.
pub fn text_to_decimal(text: &str) -> Vec<Decimal> {
    text.trim_matches('\n')
        .chars()
        .map(|c| Decimal::from(char_to_code(c)))
        .collect()
}

/// Text → bytes, rejecting the first character above U+00FF
pub fn text_to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| {
            u8::try_from(c)
                .map_err(|_| ConversionError::DecimalOutOfRange(Decimal::from(char_to_code(c))))
        })
        .collect()
}

pub fn text_to_hex(text: &str) -> Result<String> {
    Ok(hex::encode(text_to_bytes(text)?))
}

pub fn text_to_binary(text: &str) -> Result<Vec<Octet>> {
    Ok(text_to_bytes(text)?
        .into_iter()
        .map(byte_to_octet)
        .collect())
}
