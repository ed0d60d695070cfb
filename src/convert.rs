// src/convert.rs
//! String-level conversion between representations
//!
//! Parses a value written in one representation, routes it through the
//! `core` conversions and writes it out in another. Decimal values and
//! octets are read as tokens separated by whitespace or commas, and written
//! joined by the configured separator.

use num_bigint::BigUint;
use tracing::trace;

use crate::aliases::{Decimal, Octet};
use crate::config::{Format, Input};
use crate::core::{
    binary_to_decimal, binary_to_hex, binary_to_text, decimal_to_binary, decimal_to_hex_with,
    decimal_to_text, hex_to_binary, hex_to_decimal_with, hex_to_text,
    text_to_binary, text_to_bytes, text_to_decimal, text_to_hex, validate_decimal_range,
    validate_octets, xor_binary, xor_decimals, xor_hex, xor_text, Decimals, Result,
};
use crate::enums::{Repr, ValueMode};
use crate::error::ConversionError;

fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

fn join<T: ToString>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Parse a list of decimal values, e.g. `"72, 101 108"`
pub fn parse_decimals(input: &str) -> Result<Vec<Decimal>> {
    tokens(input)
        .map(|token| {
            token
                .parse::<Decimal>()
                .map_err(|_| ConversionError::InvalidDecimal(token.to_owned()))
        })
        .collect()
}

/// Parse one non-negative decimal number of any size
pub fn parse_big_decimal(input: &str) -> Result<BigUint> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::InvalidDecimal(digits.to_owned()));
    }
    digits
        .parse::<BigUint>()
        .map_err(|_| ConversionError::InvalidDecimal(digits.to_owned()))
}

/// Split octet input into its tokens; validation happens on conversion
pub fn parse_octets(input: &str) -> Vec<Octet> {
    tokens(input).map(str::to_owned).collect()
}

/// Prepare raw input for parsing as `repr`
///
/// Text only loses its trailing newlines, so a file's final line break
/// does not become part of the value.
pub fn prepare_input<'a>(raw: &'a str, repr: Repr, input: &Input) -> &'a str {
    match repr {
        Repr::Text => raw.trim_end_matches(['\r', '\n']),
        _ if input.trim => raw.trim(),
        _ => raw,
    }
}

/// Parse decimal input in either value mode
pub fn parse_decimals_with(input: &str, mode: ValueMode) -> Result<Decimals> {
    match mode {
        ValueMode::PerByte => parse_decimals(input).map(Decimals::Bytes),
        ValueMode::SingleValue => parse_big_decimal(input).map(Decimals::Single),
    }
}

/// Write decimals out; byte lists are range-checked first
pub fn format_decimals(decimals: &Decimals, separator: &str) -> Result<String> {
    match decimals {
        Decimals::Bytes(list) => Ok(join(&validate_decimal_range(list)?, separator)),
        Decimals::Single(value) => Ok(value.to_string()),
    }
}

/// Convert `input` from one representation to another
///
/// `ValueMode::SingleValue` only affects decimal and hex on either side; the
/// other pairs always work byte by byte. Converting a representation to
/// itself validates and normalizes it.
pub fn convert(
    input: &str,
    from: Repr,
    to: Repr,
    mode: ValueMode,
    format: &Format,
) -> Result<String> {
    trace!(%from, %to, ?mode, "converting");
    let sep = format.separator.as_str();

    let output = match (from, to) {
        (Repr::Decimal, Repr::Decimal) => format_decimals(&parse_decimals_with(input, mode)?, sep)?,
        (Repr::Decimal, Repr::Hex) => decimal_to_hex_with(&parse_decimals_with(input, mode)?)?,
        (Repr::Decimal, Repr::Text) => decimal_to_text(&parse_decimals(input)?)?,
        (Repr::Decimal, Repr::Binary) => decimal_to_binary(&parse_decimals(input)?)?.join(sep),

        (Repr::Text, Repr::Decimal) => join(&text_to_decimal(input), sep),
        (Repr::Text, Repr::Text) => {
            text_to_bytes(input)?;
            input.to_owned()
        }
        (Repr::Text, Repr::Hex) => text_to_hex(input)?,
        (Repr::Text, Repr::Binary) => text_to_binary(input)?.join(sep),

        (Repr::Hex, Repr::Decimal) => format_decimals(&hex_to_decimal_with(input, mode)?, sep)?,
        (Repr::Hex, Repr::Hex) => decimal_to_hex_with(&hex_to_decimal_with(input, mode)?)?,
        (Repr::Hex, Repr::Text) => hex_to_text(input)?,
        (Repr::Hex, Repr::Binary) => hex_to_binary(input)?.join(sep),

        (Repr::Binary, to) => {
            let octets = parse_octets(input);
            match to {
                Repr::Decimal => join(&binary_to_decimal(&octets)?, sep),
                Repr::Text => binary_to_text(&octets)?,
                Repr::Hex => binary_to_hex(&octets)?,
                Repr::Binary => {
                    validate_octets(&octets)?;
                    octets.join(sep)
                }
            }
        }
    };
    Ok(output)
}

/// XOR two values written in the same representation
pub fn xor(a: &str, b: &str, repr: Repr, format: &Format) -> Result<String> {
    trace!(%repr, "xor");
    let sep = format.separator.as_str();
    let output = match repr {
        Repr::Text => xor_text(a, b)?,
        Repr::Hex => xor_hex(a, b)?,
        Repr::Decimal => join(&xor_decimals(&parse_decimals(a)?, &parse_decimals(b)?)?, sep),
        Repr::Binary => xor_binary(&parse_octets(a), &parse_octets(b))?.join(sep),
    };
    Ok(output)
}
