// src/core/decimal.rs
//! Conversions from lists of decimal values
//!
//! Every per-byte conversion here validates the whole list before converting
//! anything, so a bad value never leaves a half-built result behind.

use num_bigint::BigUint;

use crate::aliases::{Decimal, Octet};
use crate::core::primitives::{byte_to_char, byte_to_octet};
use crate::core::Result;
use crate::error::ConversionError;

/// Decimal input in either value mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decimals {
    /// Independent byte values, each range-checked when converted
    Bytes(Vec<Decimal>),
    /// One unsigned number of arbitrary size
    Single(BigUint),
}

/// Range-check one decimal value
pub fn decimal_to_byte(decimal: Decimal) -> Result<u8> {
    u8::try_from(decimal).map_err(|_| ConversionError::DecimalOutOfRange(decimal))
}

/// Range-check a whole list, failing on the first value outside 0–255
pub fn validate_decimal_range(decimals: &[Decimal]) -> Result<Vec<u8>> {
    decimals.iter().copied().map(decimal_to_byte).collect()
}

pub fn decimal_to_text(decimals: &[Decimal]) -> Result<String> {
    let bytes = validate_decimal_range(decimals)?;
    Ok(bytes.into_iter().map(byte_to_char).collect())
}

pub fn decimal_to_binary(decimals: &[Decimal]) -> Result<Vec<Octet>> {
    let bytes = validate_decimal_range(decimals)?;
    Ok(bytes.into_iter().map(byte_to_octet).collect())
}

/// Decimal list → concatenated lowercase hex pairs
pub fn decimal_to_hex(decimals: &[Decimal]) -> Result<String> {
    let bytes = validate_decimal_range(decimals)?;
    Ok(hex::encode(bytes))
}

/// A single number of any size → lowercase hex, at least two digits
pub fn big_to_hex(value: &BigUint) -> String {
    format!("{value:02x}")
}

/// Decimal → hex in either value mode
///
/// `Decimals::Single` skips per-byte range validation entirely.
pub fn decimal_to_hex_with(decimals: &Decimals) -> Result<String> {
    match decimals {
        Decimals::Bytes(list) => decimal_to_hex(list),
        Decimals::Single(value) => Ok(big_to_hex(value)),
    }
}
