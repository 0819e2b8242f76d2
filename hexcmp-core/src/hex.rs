use crate::error::{HexcmpError, Result};
use crate::unit::Granularity;

/// Two lowercase hex digits per byte, in byte order.
pub fn encode(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

pub fn decode(hex_str: &str) -> Result<Vec<u8>> {
    ::hex::decode(hex_str).map_err(|e| HexcmpError::InvalidHex(e.to_string()))
}

/// Numeric value (0-15) of one hex digit. Accepts either case.
pub fn digit_value(position: usize, c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(HexcmpError::InvalidHexDigit { position, found: c })
}

/// Render a unit value as `0b` text. Bytes are zero-padded to eight digits so
/// adjacent lines line up; nibbles and bits are unpadded (`a` -> `0b1010`).
pub fn binary_text(value: u8, granularity: Granularity) -> String {
    match granularity {
        Granularity::Byte => format!("{value:#010b}"),
        Granularity::Nibble | Granularity::Bit => format!("{value:#b}"),
    }
}
