//! Mirza color values
//!
//! A color model built for UI work: red, green, blue and alpha all run from
//! 0 to 100, which makes tints, shades and blends easy to express.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mirza_core::{web_rgb, Rgb};
//!
//! let brand = Rgb::from_hex_str("#4389C2")?;
//! let hover = brand.light();              // 25% toward white
//! let pressed = brand.dark();             // 25% toward black
//! let muted = brand.mix(&Rgb::WHITE, 0.6);
//!
//! // Hand the result to the UI toolkit
//! let [r, g, b, a] = hover.to_display_color().to_array();
//! ```
//!
//! # Scales
//!
//! - Channels and lightness modifiers use 0 - 100 (`lightness(25.0)`)
//! - Mix percentages use 0.0 - 1.0 (`mix(&other, 0.25)`)
//! - Web components use 0 - 255 and are divided by 2.55 ([`web_rgb`])
//! - [`DisplayColor`] components use 0.0 - 1.0

pub mod display;
pub mod error;
pub mod hex;
pub mod rgb;

// Re-export commonly used types
pub use display::DisplayColor;
pub use error::{ColorError, ParseHexError, Result};
pub use hex::{web_rgb, web_rgba, HEX_SCALE};
pub use rgb::{Rgb, CHANNEL_MAX, MOD_LIMIT};
