//! Display colors: the boundary with host UI frameworks
//!
//! Host toolkits work with 0.0 - 1.0 color components. [`DisplayColor`] is
//! that representation, with no toolkit types attached; a toolkit integration
//! implements `From<DisplayColor>` for its own color type.
//!
//! ```rust,ignore
//! impl From<DisplayColor> for blinc_core::Color {
//!     fn from(c: DisplayColor) -> Self {
//!         let [r, g, b, a] = c.to_array();
//!         Self::rgba(r, g, b, a)
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::rgb::{Rgb, CHANNEL_MAX};

/// RGBA color with f64 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub opacity: f64,
}

impl DisplayColor {
    pub const fn new(red: f64, green: f64, blue: f64, opacity: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }

    /// Create from hue, saturation, lightness and alpha, all 0.0 - 1.0.
    ///
    /// A hue of 1.0 wraps around to 0.0 (red).
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Result<Self> {
        for (component, value) in [
            ("hue", hue),
            ("saturation", saturation),
            ("lightness", lightness),
            ("alpha", alpha),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::HslOutOfRange { component, value });
            }
        }

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = (hue * 6.0) % 6.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (r, g, b) = match sector as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Ok(Self::new(r + m, g + m, b + m, alpha))
    }

    /// Components as f32 `[r, g, b, a]`, the layout GPU-facing toolkits expect.
    pub fn to_array(&self) -> [f32; 4] {
        [
            self.red as f32,
            self.green as f32,
            self.blue as f32,
            self.opacity as f32,
        ]
    }
}

/// Display color from 0-100 components.
pub fn rgb(red: f64, green: f64, blue: f64, alpha: f64) -> DisplayColor {
    DisplayColor::new(
        red / CHANNEL_MAX,
        green / CHANNEL_MAX,
        blue / CHANNEL_MAX,
        alpha / CHANNEL_MAX,
    )
}

/// Display gray from a 0-100 level.
pub fn gray(level: f64, alpha: f64) -> DisplayColor {
    rgb(level, level, level, alpha)
}

impl Rgb {
    /// Convert to the host framework's 0.0 - 1.0 convention.
    pub fn to_display_color(&self) -> DisplayColor {
        rgb(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Inverse of [`Rgb::to_display_color`]; the result is unnamed.
    pub fn from_display_color(color: DisplayColor) -> Self {
        Self::rgba(
            color.red * CHANNEL_MAX,
            color.green * CHANNEL_MAX,
            color.blue * CHANNEL_MAX,
            color.opacity * CHANNEL_MAX,
        )
    }
}

impl From<&Rgb> for DisplayColor {
    fn from(color: &Rgb) -> Self {
        color.to_display_color()
    }
}

impl From<Rgb> for DisplayColor {
    fn from(color: Rgb) -> Self {
        color.to_display_color()
    }
}

impl From<DisplayColor> for Rgb {
    fn from(color: DisplayColor) -> Self {
        Rgb::from_display_color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_color_divides_by_100() {
        let c = Rgb::rgba(100.0, 50.0, 25.0, 10.0).to_display_color();
        assert_eq!(c, DisplayColor::new(1.0, 0.5, 0.25, 0.1));
    }

    #[test]
    fn free_helpers_match_rgb() {
        assert_eq!(rgb(100.0, 50.0, 0.0, 100.0), Rgb::ORANGE.to_display_color());
        assert_eq!(gray(50.0, 100.0), Rgb::gray(50.0).to_display_color());
    }

    #[test]
    fn round_trips_through_display_color() {
        let c = Rgb::new(100.0, 50.0, 25.0);
        assert_eq!(Rgb::from(c.to_display_color()), c);
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(
            DisplayColor::from_hsl(0.0, 1.0, 0.5, 1.0),
            Ok(DisplayColor::new(1.0, 0.0, 0.0, 1.0))
        );
        assert_eq!(
            DisplayColor::from_hsl(1.0 / 3.0, 1.0, 0.5, 1.0),
            Ok(DisplayColor::new(0.0, 1.0, 0.0, 1.0))
        );
        assert_eq!(
            DisplayColor::from_hsl(1.0, 1.0, 0.5, 0.5),
            Ok(DisplayColor::new(1.0, 0.0, 0.0, 0.5))
        );
    }

    #[test]
    fn hsl_without_saturation_is_gray() {
        assert_eq!(
            DisplayColor::from_hsl(0.7, 0.0, 0.25, 1.0),
            Ok(DisplayColor::new(0.25, 0.25, 0.25, 1.0))
        );
    }

    #[test]
    fn hsl_rejects_out_of_range() {
        assert_eq!(
            DisplayColor::from_hsl(0.0, 1.5, 0.5, 1.0),
            Err(ColorError::HslOutOfRange {
                component: "saturation",
                value: 1.5
            })
        );
    }
}
