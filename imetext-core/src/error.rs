//! Core error types
//!
//! Only genuinely recoverable input errors live here. Broken preconditions
//! (a destination buffer that is too small, an offset that is not a char
//! boundary) panic instead.

use thiserror::Error;

/// Errors produced by the fallible helpers of this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Hex input must contain two digits per byte
    #[error("hex string length must be an even number, got {length}")]
    OddHexLength {
        /// Length of the rejected input in characters
        length: usize,
    },

    /// Hex input contains something other than `[0-9a-fA-F]`
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit {
        /// Character offset of the offending digit
        position: usize,
        /// The offending character
        found: char,
    },

    /// Locale tag could not be parsed
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
