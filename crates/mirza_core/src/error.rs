//! Color error types

use thiserror::Error;

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseHexError {
    /// The normalized digit count is not one of 2, 4, 6 or 8.
    #[error("expected 2, 4, 6 or 8 hexadecimal digits, found {0}")]
    InvalidLength(usize),

    /// A non-hexadecimal character was found at the given digit index
    /// (counted after any leading `#`).
    #[error("invalid hexadecimal digit {found:?} at index {index}")]
    InvalidDigit { index: usize, found: char },
}

/// Color construction errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ColorError {
    /// Failed to parse a hex color string
    #[error(transparent)]
    Hex(#[from] ParseHexError),

    /// An HSL component was outside 0.0 - 1.0
    #[error("HSL component `{component}` out of range 0 - 1: {value}")]
    HslOutOfRange { component: &'static str, value: f64 },
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
