//! Rendering of the encoded buffer for the terminal and parsing it back.

use base64::{Engine as _, engine::general_purpose};
use clap::ValueEnum;

use crate::error::Error;

/// How the encoded buffer is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `0x`-prefixed lowercase hex, ready to paste as Solidity `bytes`
    #[default]
    Hex,
    /// Standard base64 of the raw buffer
    Base64,
}

/// `0x` followed by two lowercase hex digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn render(bytes: &[u8], format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => to_hex(bytes),
        OutputFormat::Base64 => general_purpose::STANDARD.encode(bytes),
    }
}

/// Decode a hex payload, with or without a `0x`/`0X` prefix.
pub fn from_hex(s: &str) -> Result<Vec<u8>, Error> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    Ok(hex::decode(digits)?)
}
