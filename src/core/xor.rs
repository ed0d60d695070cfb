// src/core/xor.rs
//! Byte-wise XOR over pairs of values
//!
//! Sequences of different lengths are combined up to the shorter one; the
//! tail of the longer input is dropped without an error.

use tracing::debug;

use crate::aliases::{Decimal, Octet};
use crate::core::binary::{binary_to_text, validate_octets};
use crate::core::decimal::validate_decimal_range;
use crate::core::hex::hex_to_bytes;
use crate::core::primitives::{byte_to_octet, octet_to_byte, validate_octet};
use crate::core::text::text_to_binary;
use crate::core::Result;

fn note_truncation(left: usize, right: usize) {
    if left != right {
        debug!(
            left,
            right,
            kept = left.min(right),
            "xor inputs differ in length, truncating"
        );
    }
}

/// Bitwise XOR of two octets
pub fn xor_octets(a: &str, b: &str) -> Result<Octet> {
    validate_octet(a)?;
    validate_octet(b)?;
    Ok(a.bytes()
        .zip(b.bytes())
        .map(|(x, y)| if x == y { '0' } else { '1' })
        .collect())
}

/// XOR two octet lists element by element
pub fn xor_binary<S: AsRef<str>>(a: &[S], b: &[S]) -> Result<Vec<Octet>> {
    validate_octets(a)?;
    validate_octets(b)?;
    note_truncation(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| xor_octets(x.as_ref(), y.as_ref()))
        .collect()
}

/// XOR two strings character by character
pub fn xor_text(a: &str, b: &str) -> Result<String> {
    let a = text_to_binary(a)?;
    let b = text_to_binary(b)?;
    binary_to_text(&xor_binary(&a, &b)?)
}

/// XOR two decimal lists; both are range-checked in full first
pub fn xor_decimals(a: &[Decimal], b: &[Decimal]) -> Result<Vec<Decimal>> {
    let a = validate_decimal_range(a)?;
    let b = validate_decimal_range(b)?;
    note_truncation(a.len(), b.len());
    a.into_iter()
        .zip(b)
        .map(|(x, y)| {
            let octet = xor_octets(&byte_to_octet(x), &byte_to_octet(y))?;
            octet_to_byte(&octet).map(Decimal::from)
        })
        .collect()
}

/// XOR two hex strings pair by pair
pub fn xor_hex(a: &str, b: &str) -> Result<String> {
    let a = hex_to_bytes(a)?;
    let b = hex_to_bytes(b)?;
    note_truncation(a.len(), b.len());
    let xored: Vec<u8> = a.iter().zip(&b).map(|(x, y)| x ^ y).collect();
    Ok(hex::encode(xored))
}
