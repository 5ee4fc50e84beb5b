//! Lowercase hex encoding of byte strings

use std::fmt::Write;

use crate::error::{CoreError, Result};

/// Two lowercase hex digits per byte; empty input gives an empty string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing to a String cannot fail
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}

/// Decode hex digits of either case into bytes
///
/// # Errors
/// [`CoreError::OddHexLength`] when the digit count is odd and
/// [`CoreError::InvalidHexDigit`] on anything outside `[0-9a-fA-F]`.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let digits: Vec<char> = hex.chars().collect();
    if digits.len() % 2 != 0 {
        return Err(CoreError::OddHexLength {
            length: digits.len(),
        });
    }

    let digit_value = |position: usize| -> Result<u8> {
        let found = digits[position];
        found
            .to_digit(16)
            .map(|value| value as u8)
            .ok_or(CoreError::InvalidHexDigit { position, found })
    };

    (0..digits.len())
        .step_by(2)
        .map(|position| Ok((digit_value(position)? << 4) | digit_value(position + 1)?))
        .collect()
}
