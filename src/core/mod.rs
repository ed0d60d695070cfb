// src/core/mod.rs
//! Byte representation conversions
//!
//! `primitives` holds the single-value building blocks; every other module
//! chains them into sequence-level conversions that validate their whole
//! input before producing any output.

pub mod binary;
pub mod decimal;
pub mod hex;
pub mod primitives;
pub mod text;
pub mod xor;

pub use binary::*;
pub use decimal::*;
pub use hex::*;
pub use primitives::*;
pub use text::*;
pub use xor::*;

pub type Result<T> = std::result::Result<T, crate::error::ConversionError>;
