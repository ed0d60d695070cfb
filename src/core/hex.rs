// src/core/hex.rs
//! Conversions from hex strings
//!
//! Hex input may carry a `0x` prefix and mixed-case digits. In per-byte mode
//! the digits are read as consecutive pairs; an odd digit count is an error
//! rather than a silently dropped or reinterpreted trailing nibble.

use num_bigint::BigUint;

use crate::aliases::{Decimal, Octet};
use crate::consts::HEX_PREFIXES;
use crate::core::decimal::Decimals;
use crate::core::primitives::{byte_to_char, byte_to_octet};
use crate::core::Result;
use crate::enums::ValueMode;
use crate::error::ConversionError;

/// Drop a leading `0x`/`0X`, if any
pub fn strip_hex_prefix(hex: &str) -> &str {
    HEX_PREFIXES
        .iter()
        .find_map(|prefix| hex.strip_prefix(prefix))
        .unwrap_or(hex)
}

/// Hex string → bytes, one per pair
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let digits = strip_hex_prefix(hex);
    hex::decode(digits).map_err(|e| ConversionError::invalid_hex(digits, e))
}

pub fn hex_to_decimal(hex: &str) -> Result<Vec<Decimal>> {
    Ok(hex_to_bytes(hex)?
        .into_iter()
        .map(Decimal::from)
        .collect())
}

/// The whole hex string as one unsigned number, with no per-byte limit
pub fn hex_to_big(hex: &str) -> Result<BigUint> {
    let digits = strip_hex_prefix(hex);

    // BigUint's own parser also accepts `+` and `_`, which are not hex digits
    if let Some((index, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(ConversionError::invalid_hex(
            digits,
            hex::FromHexError::InvalidHexCharacter { c, index },
        ));
    }

    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| {
        ConversionError::invalid_hex(digits, hex::FromHexError::InvalidStringLength)
    })
}

/// Hex → decimal in either value mode
pub fn hex_to_decimal_with(hex: &str, mode: ValueMode) -> Result<Decimals> {
    match mode {
        ValueMode::PerByte => hex_to_decimal(hex).map(Decimals::Bytes),
        ValueMode::SingleValue => hex_to_big(hex).map(Decimals::Single),
    }
}

pub fn hex_to_text(hex: &str) -> Result<String> {
    Ok(hex_to_bytes(hex)?.into_iter().map(byte_to_char).collect())
}

pub fn hex_to_binary(hex: &str) -> Result<Vec<Octet>> {
    Ok(hex_to_bytes(hex)?
        .into_iter()
        .map(byte_to_octet)
        .collect())
}
