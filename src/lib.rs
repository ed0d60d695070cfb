// src/lib.rs
//! ctf-converter — byte value conversions for cryptography exercises
//!
//! Features:
//! - Decimal, text, hex and binary representations of bytes 0–255
//! - Single-value mode for hex/decimal numbers of any size
//! - Byte-wise XOR of text, decimal, hex and binary sequences
//! - All-or-nothing validation: no partially converted output

pub mod aliases;
pub mod config;
pub mod consts;
pub mod convert;
pub mod core;
pub mod enums;
pub mod error;
pub mod file_ops;

// Re-export everything users need at the crate root
pub use aliases::{Decimal, Octet};
pub use config::load as load_config;
pub use crate::core::{Decimals, Result};
pub use enums::{Repr, ValueMode};
pub use error::ConversionError;
pub use file_ops::{load_data, read_input};
