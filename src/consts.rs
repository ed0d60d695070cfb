// src/consts.rs
//! Shared constants — representation limits and defaults

/// Number of bits in a binary octet
pub const OCTET_BITS: usize = 8;

/// Prefixes stripped from hex input (never emitted)
pub const HEX_PREFIXES: [&str; 2] = ["0x", "0X"];

/// Environment variable pointing at the config file
pub const CONFIG_ENV_VAR: &str = "CTFC_CONFIG";

/// Config file used when `CTFC_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "ctf-converter.toml";

/// Default separator between decimal values and octets on output
pub const DEFAULT_SEPARATOR: &str = " ";

/// Name reported for input read from stdin
pub const STDIN_PATH: &str = "<stdin>";
