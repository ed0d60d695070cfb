// src/aliases.rs
//! Shared type aliases for the representations handled by this crate

/// A decimal value as supplied by a caller.
///
/// Signed and wider than a byte so that values like `-1` or `256` can be
/// represented and rejected by range validation instead of wrapping.
pub type Decimal = i64;

/// An 8-character string of `0`/`1`, most significant bit first.
pub type Octet = String;
