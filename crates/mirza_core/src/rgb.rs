//! The 0-100 RGBA color value and its derivations

use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound of every channel.
pub const CHANNEL_MAX: f64 = 100.0;

/// Lightness modifiers are clamped to `-MOD_LIMIT..=MOD_LIMIT`.
pub const MOD_LIMIT: f64 = 100.0;

// Lightness modifiers of the standard variants
pub const PASTEL: f64 = 90.0;
pub const LIGHTEST: f64 = 75.0;
pub const LIGHTER: f64 = 50.0;
pub const LIGHT: f64 = 25.0;
pub const DARK: f64 = -25.0;
pub const DARKER: f64 = -50.0;
pub const DARKEST: f64 = -75.0;

/// A color with red, green, blue and alpha channels on a 0-100 scale.
///
/// The 0-100 scale makes variants and schemes easy to reason about:
/// `Rgb::new(100.0, 50.0, 0.0)` is orange, `.lightness(25.0)` moves it a
/// quarter of the way to white.
///
/// Channels are not range checked on construction. Only [`Rgb::brightness`]
/// and [`Rgb::lightness`] clamp; [`Rgb::mix`] passes values through.
///
/// Two colors are equal when their names and channels are identical. A named
/// color never equals an unnamed one, even with the same channels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rgb {
    red: f64,
    green: f64,
    blue: f64,
    #[serde(default = "default_alpha")]
    alpha: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
}

fn default_alpha() -> f64 {
    CHANNEL_MAX
}

impl Rgb {
    pub const CLEAR: Rgb = Rgb::rgba(100.0, 100.0, 100.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(100.0, 100.0, 100.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const RED: Rgb = Rgb::new(100.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 100.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 100.0);

    pub const YELLOW: Rgb = Rgb::new(100.0, 100.0, 0.0);
    pub const ORANGE: Rgb = Rgb::new(100.0, 50.0, 0.0);
    pub const PURPLE: Rgb = Rgb::new(50.0, 0.0, 50.0);

    pub const AQUA: Rgb = Rgb::new(0.0, 50.0, 50.0);

    /// Gray level used when no level is given
    pub const DEFAULT_GRAY: f64 = 50.0;

    /// Default blend used by [`Rgb::smart_light`]
    pub const SMART_LIGHT_PERCENT: f64 = 0.85;

    /// Opaque, unnamed color
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, CHANNEL_MAX)
    }

    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            name: String::new(),
        }
    }

    /// Opaque gray with all three channels set to `level`
    pub const fn gray(level: f64) -> Self {
        Self::new(level, level, level)
    }

    /// Return a copy carrying the given name.
    ///
    /// The name takes part in equality and hashing.
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Channels as `[red, green, blue, alpha]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    // ========== Derivations ==========

    /// Scale red, green and blue by `modifier`, clamping each to 0-100.
    ///
    /// Alpha is unchanged. `brightness(1.0)` leaves in-range channels as they are.
    pub fn brightness(&self, modifier: f64) -> Rgb {
        let scale = |channel: f64| (channel * modifier).clamp(0.0, CHANNEL_MAX);
        Rgb::rgba(
            scale(self.red),
            scale(self.green),
            scale(self.blue),
            self.alpha,
        )
    }

    /// Move toward white (positive) or black (negative).
    ///
    /// `modifier` is on the same -100 to 100 scale as the channels and is
    /// clamped to it: `lightness(25.0)` mixes in 25% white, `lightness(-100.0)`
    /// is black. Zero returns an identical copy, name included.
    pub fn lightness(&self, modifier: f64) -> Rgb {
        let modifier = modifier.clamp(-MOD_LIMIT, MOD_LIMIT);

        if modifier == 0.0 {
            return self.clone();
        }

        let target = if modifier > 0.0 { Rgb::WHITE } else { Rgb::BLACK };
        tracing::trace!("Rgb::lightness - mixing {:.1}% toward {}", modifier.abs(), target);
        self.mix(&target, modifier.abs() / MOD_LIMIT)
    }

    /// [`Rgb::smart_light_with`] at the default 0.85 blend.
    pub fn smart_light(&self, mod_brightness: f64, mod_lightness: f64) -> Rgb {
        self.smart_light_with(mod_brightness, mod_lightness, Self::SMART_LIGHT_PERCENT)
    }

    /// Apply brightness and lightness independently, then mix the lightness
    /// result into the brightness result by `percent` (0.0 - 1.0).
    pub fn smart_light_with(&self, mod_brightness: f64, mod_lightness: f64, percent: f64) -> Rgb {
        let bright = self.brightness(mod_brightness);
        let light = self.lightness(mod_lightness);
        bright.mix(&light, percent)
    }

    /// Blend in `percent` (0.0 - 1.0) of `other`, channel by channel.
    ///
    /// Alpha is interpolated like the color channels. `percent == 1.0` returns
    /// `other`'s channels exactly. Nothing is clamped, so percentages outside
    /// 0-1 extrapolate.
    pub fn mix(&self, other: &Rgb, percent: f64) -> Rgb {
        Rgb::rgba(
            between(self.red, other.red, percent),
            between(self.green, other.green, percent),
            between(self.blue, other.blue, percent),
            between(self.alpha, other.alpha, percent),
        )
    }

    /// Even mix of two colors
    pub fn blend(&self, other: &Rgb) -> Rgb {
        self.mix(other, 0.5)
    }

    // ========== Variants ==========

    pub fn pastel(&self) -> Rgb {
        self.lightness(PASTEL)
    }

    pub fn lightest(&self) -> Rgb {
        self.lightness(LIGHTEST)
    }

    pub fn lighter(&self) -> Rgb {
        self.lightness(LIGHTER)
    }

    pub fn light(&self) -> Rgb {
        self.lightness(LIGHT)
    }

    pub fn dark(&self) -> Rgb {
        self.lightness(DARK)
    }

    pub fn darker(&self) -> Rgb {
        self.lightness(DARKER)
    }

    pub fn darkest(&self) -> Rgb {
        self.lightness(DARKEST)
    }

    /// Standard variants ordered light to dark, with `self` in the middle:
    /// pastel, lightest, lighter, light, self, dark, darker, darkest.
    pub fn variants(&self) -> [Rgb; 8] {
        [
            self.pastel(),
            self.lightest(),
            self.lighter(),
            self.light(),
            self.clone(),
            self.dark(),
            self.darker(),
            self.darkest(),
        ]
    }

    // ========== Random ==========

    /// Opaque color with uniformly random red, green and blue.
    pub fn random() -> Rgb {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Like [`Rgb::random`] but drawing from the given generator.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
        Rgb::new(
            rng.gen_range(0.0..=CHANNEL_MAX),
            rng.gen_range(0.0..=CHANNEL_MAX),
            rng.gen_range(0.0..=CHANNEL_MAX),
        )
    }

    /// Identity used for equality and hashing: the name plus the exact bit
    /// pattern of every channel, with all NaNs folded together.
    fn identity(&self) -> (&str, [u64; 4]) {
        (self.name.as_str(), self.to_array().map(channel_bits))
    }
}

/// Linear interpolation that lands exactly on `to` at a full mix.
fn between(from: f64, to: f64, percent: f64) -> f64 {
    if percent == 1.0 {
        to
    } else {
        from + (to - from) * percent
    }
}

fn channel_bits(channel: f64) -> u64 {
    if channel.is_nan() {
        f64::NAN.to_bits()
    } else {
        channel.to_bits()
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Rgb {}

impl Hash for Rgb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            write!(f, "{} ", self.name)?;
        }
        write!(f, "r:{}, g:{}, b:{}", self.red, self.green, self.blue)?;
        if self.alpha != CHANNEL_MAX {
            write!(f, ", alpha:{}", self.alpha)?;
        }
        Ok(())
    }
}
