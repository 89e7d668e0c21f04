//! Palettes (color schemes)

use std::fmt::{self, Display, Formatter};

use mirza_core::{DisplayColor, Rgb};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Danger color used when a palette does not name one
pub const DEFAULT_DANGER: Rgb = Rgb::new(80.0, 10.0, 10.0);

/// Palette classification by number of distinct scheme colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Primary, secondary and tertiary (quaternary repeats tertiary)
    Triadic,
    /// Primary, secondary, tertiary and a distinct quaternary
    Tetradic,
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
        })
    }
}

/// A named palette of scheme colors plus a danger color.
///
/// `quaternary` always holds a value: palettes built without one copy the
/// tertiary color into it, which is what makes them triadic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PaletteFields")]
pub struct Palette {
    name: String,
    primary: Rgb,
    secondary: Rgb,
    tertiary: Rgb,
    quaternary: Rgb,
    danger: Rgb,
}

/// Deserialization shape with the optional colors left open
#[derive(Deserialize)]
struct PaletteFields {
    name: String,
    primary: Rgb,
    secondary: Rgb,
    tertiary: Rgb,
    #[serde(default)]
    quaternary: Option<Rgb>,
    #[serde(default)]
    danger: Option<Rgb>,
}

impl From<PaletteFields> for Palette {
    fn from(fields: PaletteFields) -> Self {
        Palette::with_optional(
            fields.name,
            fields.primary,
            fields.secondary,
            fields.tertiary,
            fields.quaternary,
            fields.danger,
        )
    }
}

impl Palette {
    /// Triadic palette with the default danger color.
    pub fn new(name: impl Into<String>, primary: Rgb, secondary: Rgb, tertiary: Rgb) -> Self {
        Self::with_optional(name, primary, secondary, tertiary, None, None)
    }

    /// Build a palette where `quaternary` falls back to `tertiary` and
    /// `danger` falls back to [`DEFAULT_DANGER`].
    pub fn with_optional(
        name: impl Into<String>,
        primary: Rgb,
        secondary: Rgb,
        tertiary: Rgb,
        quaternary: Option<Rgb>,
        danger: Option<Rgb>,
    ) -> Self {
        let quaternary = quaternary.unwrap_or_else(|| tertiary.clone());
        Self {
            name: name.into(),
            primary,
            secondary,
            tertiary,
            quaternary,
            danger: danger.unwrap_or(DEFAULT_DANGER),
        }
    }

    /// Replace the quaternary color
    pub fn with_quaternary(self, quaternary: Rgb) -> Self {
        Self { quaternary, ..self }
    }

    /// Replace the danger color
    pub fn with_danger(self, danger: Rgb) -> Self {
        Self { danger, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary(&self) -> &Rgb {
        &self.primary
    }

    pub fn secondary(&self) -> &Rgb {
        &self.secondary
    }

    pub fn tertiary(&self) -> &Rgb {
        &self.tertiary
    }

    pub fn quaternary(&self) -> &Rgb {
        &self.quaternary
    }

    pub fn danger(&self) -> &Rgb {
        &self.danger
    }

    /// Triadic when tertiary and quaternary are equal (names included),
    /// tetradic otherwise.
    pub fn scheme(&self) -> ColorScheme {
        if self.tertiary == self.quaternary {
            ColorScheme::Triadic
        } else {
            ColorScheme::Tetradic
        }
    }

    /// Palette colors in display order, danger last.
    ///
    /// Triadic palettes yield 4 colors, tetradic palettes 5.
    pub fn values(&self) -> SmallVec<[&Rgb; 5]> {
        match self.scheme() {
            ColorScheme::Triadic => {
                smallvec![&self.primary, &self.secondary, &self.tertiary, &self.danger]
            }
            ColorScheme::Tetradic => smallvec![
                &self.primary,
                &self.secondary,
                &self.tertiary,
                &self.quaternary,
                &self.danger,
            ],
        }
    }

    /// [`Palette::values`] converted for the host UI framework.
    pub fn colors(&self) -> SmallVec<[DisplayColor; 5]> {
        self.values()
            .into_iter()
            .map(Rgb::to_display_color)
            .collect()
    }

    /// Light-to-dark variant sequence of every color, in `values()` order.
    pub fn variants(&self) -> Vec<[Rgb; 8]> {
        self.values().into_iter().map(Rgb::variants).collect()
    }
}

impl Display for Palette {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - primary:{}, secondary:{}, tertiary:{}",
            self.name, self.primary, self.secondary, self.tertiary
        )?;
        if self.scheme() == ColorScheme::Tetradic {
            write!(f, ", quaternary:{}", self.quaternary)?;
        }
        write!(f, ", danger:{}", self.danger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triad() -> Palette {
        Palette::new("triad", Rgb::RED, Rgb::GREEN, Rgb::BLUE)
    }

    #[test]
    fn omitted_quaternary_is_triadic() {
        let p = triad();
        assert_eq!(p.scheme(), ColorScheme::Triadic);
        assert_eq!(p.quaternary(), p.tertiary());
        assert_eq!(p.danger(), &DEFAULT_DANGER);
    }

    #[test]
    fn distinct_quaternary_is_tetradic() {
        let p = triad().with_quaternary(Rgb::YELLOW);
        assert_eq!(p.scheme(), ColorScheme::Tetradic);
    }

    #[test]
    fn named_copy_of_tertiary_is_tetradic() {
        let p = triad().with_quaternary(Rgb::BLUE.named("blue"));
        assert_eq!(p.scheme(), ColorScheme::Tetradic);
    }

    #[test]
    fn values_end_with_danger() {
        let danger = Rgb::new(90.0, 0.0, 0.0);
        let p = triad().with_danger(danger.clone());
        let values = p.values();
        assert_eq!(values.len(), 4);
        assert_eq!(values.last(), Some(&&danger));
        drop(values);

        let p = p.with_quaternary(Rgb::YELLOW);
        let values = p.values();
        assert_eq!(values.len(), 5);
        assert_eq!(values[3], &Rgb::YELLOW);
        assert_eq!(values.last(), Some(&&danger));
    }

    #[test]
    fn colors_follow_values() {
        let p = triad().with_quaternary(Rgb::YELLOW);
        let expected: Vec<DisplayColor> = p.values().iter().map(|c| c.to_display_color()).collect();
        assert_eq!(p.colors().to_vec(), expected);
        assert_eq!(p.colors()[0], DisplayColor::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn variants_per_value() {
        let p = triad();
        let variants = p.variants();
        assert_eq!(variants.len(), 4);
        assert_eq!(variants[1][4], Rgb::GREEN);
    }

    #[test]
    fn describe_triadic_and_tetradic() {
        let p = Palette::new("mono", Rgb::BLACK, Rgb::gray(50.0), Rgb::WHITE);
        assert_eq!(
            p.to_string(),
            "mono - primary:r:0, g:0, b:0, secondary:r:50, g:50, b:50, \
             tertiary:r:100, g:100, b:100, danger:r:80, g:10, b:10"
        );

        let p = p.with_quaternary(Rgb::RED);
        assert_eq!(
            p.to_string(),
            "mono - primary:r:0, g:0, b:0, secondary:r:50, g:50, b:50, \
             tertiary:r:100, g:100, b:100, quaternary:r:100, g:0, b:0, danger:r:80, g:10, b:10"
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "name": "json",
            "primary": {"red": 10, "green": 20, "blue": 30},
            "secondary": {"red": 40, "green": 50, "blue": 60},
            "tertiary": {"red": 70, "green": 80, "blue": 90}
        }"#;
        let p: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(p.scheme(), ColorScheme::Triadic);
        assert_eq!(p.danger(), &DEFAULT_DANGER);

        let back: Palette = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(back, p);
    }
}
