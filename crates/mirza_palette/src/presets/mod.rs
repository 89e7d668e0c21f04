//! Built-in palette catalog.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use mirza_core::web_rgb;

use crate::error::PaletteError;
use crate::palette::Palette;

/// Built-in palette presets, in catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PalettePreset {
    /// Violet, green and gold.
    Fun,
    /// Sky, leaf and straw. The palette itself is named "default".
    Nature,
    /// Green, amber and red.
    TrafficLight,
    /// Soft violet, sky blue and pale yellow.
    Rainbow,
    /// Teal, indigo, mustard and orange (tetradic).
    Social,
    /// Jade, purple, rust and olive (tetradic).
    Nouveau,
}

impl PalettePreset {
    /// Stable preset id for config/CLI use.
    pub fn id(self) -> &'static str {
        match self {
            Self::Fun => "fun",
            Self::Nature => "nature",
            Self::TrafficLight => "traffic-light",
            Self::Rainbow => "rainbow",
            Self::Social => "social",
            Self::Nouveau => "nouveau",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Fun => "Fun",
            Self::Nature => "Nature",
            Self::TrafficLight => "Traffic Light",
            Self::Rainbow => "Rainbow",
            Self::Social => "Social",
            Self::Nouveau => "Nouveau",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [PalettePreset] {
        const PRESETS: [PalettePreset; 6] = [
            PalettePreset::Fun,
            PalettePreset::Nature,
            PalettePreset::TrafficLight,
            PalettePreset::Rainbow,
            PalettePreset::Social,
            PalettePreset::Nouveau,
        ];
        &PRESETS
    }

    /// The shared catalog palette for this preset.
    pub fn palette(self) -> &'static Palette {
        &builtin_palettes()[self as usize]
    }

    fn build(self) -> Palette {
        match self {
            Self::Fun => Palette::new(
                "fun",
                web_rgb(102.0, 71.0, 216.0),
                web_rgb(43.0, 139.0, 49.0),
                web_rgb(208.0, 178.0, 26.0),
            ),
            Self::Nature => Palette::new(
                "default",
                web_rgb(67.0, 137.0, 194.0),
                web_rgb(149.0, 200.0, 46.0),
                web_rgb(218.0, 175.0, 63.0),
            ),
            Self::TrafficLight => Palette::new(
                "traffic light",
                web_rgb(50.0, 127.0, 97.0),
                web_rgb(229.0, 161.0, 10.0),
                web_rgb(216.0, 58.0, 50.0),
            ),
            Self::Rainbow => Palette::new(
                "rainbow",
                web_rgb(163.0, 130.0, 212.0),
                web_rgb(137.0, 195.0, 233.0),
                web_rgb(250.0, 234.0, 144.0),
            ),
            Self::Social => Palette::new(
                "social",
                web_rgb(12.0, 198.0, 171.0),
                web_rgb(84.0, 33.0, 244.0),
                web_rgb(203.0, 148.0, 8.0),
            )
            .with_quaternary(web_rgb(214.0, 101.0, 8.0)),
            Self::Nouveau => Palette::new(
                "nouveau",
                web_rgb(57.0, 174.0, 160.0),
                web_rgb(111.0, 62.0, 193.0),
                web_rgb(217.0, 108.0, 20.0),
            )
            .with_quaternary(web_rgb(125.0, 168.0, 53.0)),
        }
    }

    /// Find a preset by id or palette name, ignoring case.
    pub fn find(name: &str) -> Option<PalettePreset> {
        let name = name.trim();
        Self::all().iter().copied().find(|preset| {
            preset.id().eq_ignore_ascii_case(name) || preset.palette().name().eq_ignore_ascii_case(name)
        })
    }
}

impl Display for PalettePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PalettePreset {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::find(s).ok_or_else(|| PaletteError::Unknown(s.to_string()))
    }
}

/// Every built-in palette, in [`PalettePreset::all`] order.
///
/// Built on first access and shared for the life of the process.
pub fn builtin_palettes() -> &'static [Palette] {
    static BUILTINS: OnceLock<Vec<Palette>> = OnceLock::new();
    BUILTINS.get_or_init(|| {
        tracing::debug!("building {} built-in palettes", PalettePreset::all().len());
        PalettePreset::all().iter().map(|p| p.build()).collect()
    })
}

/// Convenience lookup of a built-in palette by id or name.
pub fn find_builtin(name: &str) -> Option<&'static Palette> {
    PalettePreset::find(name).map(PalettePreset::palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_presets() {
        for (preset, palette) in PalettePreset::all().iter().zip(builtin_palettes()) {
            assert_eq!(preset.palette(), palette);
            assert_eq!(&preset.build(), palette);
        }
    }

    #[test]
    fn nature_answers_to_both_names() {
        assert_eq!(PalettePreset::find("nature"), Some(PalettePreset::Nature));
        assert_eq!(PalettePreset::find("Default"), Some(PalettePreset::Nature));
        assert_eq!(PalettePreset::find("traffic light"), Some(PalettePreset::TrafficLight));
        assert_eq!(PalettePreset::find("TRAFFIC-LIGHT"), Some(PalettePreset::TrafficLight));
        assert_eq!(PalettePreset::find("mauve"), None);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = "mauve".parse::<PalettePreset>().unwrap_err();
        assert!(matches!(err, PaletteError::Unknown(name) if name == "mauve"));
    }
}
