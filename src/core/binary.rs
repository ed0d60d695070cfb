// src/core/binary.rs
//! Conversions from lists of binary octets

use crate::aliases::Decimal;
use crate::core::primitives::{byte_to_char, octet_to_byte, validate_octet};
use crate::core::Result;

/// Check every octet before any of them is converted
pub fn validate_octets<S: AsRef<str>>(octets: &[S]) -> Result<()> {
    octets
        .iter()
        .try_for_each(|octet| validate_octet(octet.as_ref()))
}

/// Octets → bytes, all-or-nothing
pub fn binary_to_bytes<S: AsRef<str>>(octets: &[S]) -> Result<Vec<u8>> {
    validate_octets(octets)?;
    octets
        .iter()
        .map(|octet| octet_to_byte(octet.as_ref()))
        .collect()
}

pub fn binary_to_hex<S: AsRef<str>>(octets: &[S]) -> Result<String> {
    Ok(hex::encode(binary_to_bytes(octets)?))
}

pub fn binary_to_text<S: AsRef<str>>(octets: &[S]) -> Result<String> {
    Ok(binary_to_bytes(octets)?
        .into_iter()
        .map(byte_to_char)
        .collect())
}

pub fn binary_to_decimal<S: AsRef<str>>(octets: &[S]) -> Result<Vec<Decimal>> {
    Ok(binary_to_bytes(octets)?
        .into_iter()
        .map(Decimal::from)
        .collect())
}
