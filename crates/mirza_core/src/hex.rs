//! Hex and web (0-255) color conversions

use std::str::FromStr;

use crate::error::ParseHexError;
use crate::rgb::Rgb;

/// Divisor taking a 0-255 byte to the 0-100 channel scale.
///
/// Kept as the literal 2.55 so that `255 / HEX_SCALE` lands exactly on 100.
pub const HEX_SCALE: f64 = 2.55;

/// Longest accepted digit count (`RRGGBBAA`); longer input is truncated.
pub const MAX_HEX_DIGITS: usize = 8;

/// Build a color from web-style 0-255 components, fully opaque.
pub fn web_rgb(red: f64, green: f64, blue: f64) -> Rgb {
    web_rgba(red, green, blue, 255.0)
}

/// Build a color from web-style 0-255 components including alpha.
pub fn web_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Rgb {
    Rgb::rgba(
        red / HEX_SCALE,
        green / HEX_SCALE,
        blue / HEX_SCALE,
        alpha / HEX_SCALE,
    )
}

impl Rgb {
    /// Create from a packed `0xRRGGBB` value. Bits above the low 24 are ignored.
    pub fn from_hex(hex: u32) -> Self {
        Self::new(
            byte_channel(hex, 16),
            byte_channel(hex, 8),
            byte_channel(hex, 0),
        )
    }

    /// Parse a hex color string.
    ///
    /// A leading `#` is optional. Odd-length input has its last digit
    /// repeated, and anything past 8 digits is dropped. The resulting digit
    /// count selects the layout:
    ///
    /// | digits | layout     |
    /// |--------|------------|
    /// | 2      | `GG`       |
    /// | 4      | `GGAA`     |
    /// | 6      | `RRGGBB`   |
    /// | 8      | `RRGGBBAA` |
    ///
    /// ```rust,ignore
    /// let orange = Rgb::from_hex_str("#FF8000")?;
    /// let gray = Rgb::from_hex_str("8")?; // "88"
    /// ```
    pub fn from_hex_str(input: &str) -> Result<Self, ParseHexError> {
        let digits = normalize_hex(input)?;

        let mut value: u32 = 0;
        for c in digits.chars() {
            // normalize_hex has already rejected non-hex characters
            value = (value << 4) | c.to_digit(16).unwrap_or(0);
        }

        let color = match digits.len() {
            2 => Self::gray(byte_channel(value, 0)),
            4 => {
                let level = byte_channel(value, 8);
                Self::rgba(level, level, level, byte_channel(value, 0))
            }
            6 => Self::new(
                byte_channel(value, 16),
                byte_channel(value, 8),
                byte_channel(value, 0),
            ),
            8 => Self::rgba(
                byte_channel(value, 24),
                byte_channel(value, 16),
                byte_channel(value, 8),
                byte_channel(value, 0),
            ),
            len => return Err(ParseHexError::InvalidLength(len)),
        };

        tracing::trace!("Rgb::from_hex_str - {:?} -> {}", input, color);
        Ok(color)
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    ///
    /// Channels are rounded to the nearest byte and clamped to 0-255.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_array().map(channel_byte);
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

fn byte_channel(value: u32, shift: u32) -> f64 {
    f64::from((value >> shift) & 0xFF) / HEX_SCALE
}

fn channel_byte(channel: f64) -> u8 {
    (channel * HEX_SCALE).round().clamp(0.0, 255.0) as u8
}

/// Strip `#`, validate digits, pad odd lengths and truncate to 8 digits.
fn normalize_hex(input: &str) -> Result<String, ParseHexError> {
    let trimmed = input.trim();
    let raw = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if let Some((index, found)) = raw.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(ParseHexError::InvalidDigit { index, found });
    }

    let mut digits = raw.to_string();
    if let Some(last) = digits.chars().last() {
        if digits.len() % 2 == 1 {
            digits.push(last);
        }
    }
    if digits.len() > MAX_HEX_DIGITS {
        tracing::warn!(
            "hex color {:?} has more than {} digits, ignoring the rest",
            input,
            MAX_HEX_DIGITS
        );
        digits.truncate(MAX_HEX_DIGITS);
    }
    Ok(digits)
}
