//! Palette error types

use std::path::PathBuf;

use mirza_core::ParseHexError;
use thiserror::Error;

/// Palette loading and lookup errors
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Failed to read a palette file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Palette file is not valid TOML or does not match the expected layout
    #[error("invalid palette file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to write palettes back out as TOML
    #[error("failed to serialize palettes: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A color in a palette file could not be parsed
    #[error("palette `{palette}` has an invalid {role} color: {source}")]
    InvalidColor {
        palette: String,
        role: &'static str,
        #[source]
        source: ParseHexError,
    },

    /// Two palettes in one file share a name
    #[error("duplicate palette name `{0}`")]
    Duplicate(String),

    /// No built-in or loaded palette has this name
    #[error("unknown palette `{0}`")]
    Unknown(String),
}

/// Result type for palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;
