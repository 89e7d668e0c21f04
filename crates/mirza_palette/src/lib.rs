//! Mirza palettes
//!
//! A palette groups three or four scheme colors with a danger color:
//!
//! - **Triadic**: primary, secondary, tertiary, danger
//! - **Tetradic**: primary, secondary, tertiary, quaternary, danger
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mirza_palette::{builtin_palettes, Palette, PalettePreset};
//! use mirza_core::Rgb;
//!
//! for palette in builtin_palettes() {
//!     println!("{palette}");
//! }
//!
//! let fun = PalettePreset::Fun.palette();
//! let swatches = fun.colors(); // DisplayColor values for the UI toolkit
//!
//! let custom = Palette::new("ocean", Rgb::BLUE, Rgb::AQUA, Rgb::WHITE)
//!     .with_danger(Rgb::RED);
//! ```
//!
//! # Palette Files
//!
//! [`PaletteFile`] reads and writes palettes as TOML, accepting hex strings
//! or channel tables for each color.

pub mod error;
pub mod file;
pub mod palette;
pub mod presets;

// Re-export commonly used types
pub use error::{PaletteError, Result};
pub use file::{ColorSpec, PaletteFile};
pub use palette::{ColorScheme, Palette, DEFAULT_DANGER};
pub use presets::{builtin_palettes, find_builtin, PalettePreset};
