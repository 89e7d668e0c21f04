//! Palette files
//!
//! Palettes can be described in TOML, one `[[palette]]` table each. Colors
//! are written either as hex strings or as channel tables:
//!
//! ```toml
//! [[palette]]
//! name = "brand"
//! primary = "#4389C2"
//! secondary = { red = 58.4, green = 78.4, blue = 18.0 }
//! tertiary = "#DAAF3F"
//! # quaternary and danger are optional
//! danger = "#C0392B"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use mirza_core::{ParseHexError, Rgb};
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::palette::{ColorScheme, Palette, DEFAULT_DANGER};

/// A color as written in a palette file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex string such as `"#4389C2"`
    Hex(String),
    /// Channel table on the 0-100 scale
    Channels(Rgb),
}

impl ColorSpec {
    pub fn resolve(&self) -> std::result::Result<Rgb, ParseHexError> {
        match self {
            Self::Hex(hex) => Rgb::from_hex_str(hex),
            Self::Channels(rgb) => Ok(rgb.clone()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PaletteEntry {
    name: String,
    primary: ColorSpec,
    secondary: ColorSpec,
    tertiary: ColorSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quaternary: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    danger: Option<ColorSpec>,
}

impl PaletteEntry {
    fn from_palette(palette: &Palette) -> Self {
        let quaternary = match palette.scheme() {
            ColorScheme::Triadic => None,
            ColorScheme::Tetradic => Some(ColorSpec::Channels(palette.quaternary().clone())),
        };
        let danger = (palette.danger() != &DEFAULT_DANGER)
            .then(|| ColorSpec::Channels(palette.danger().clone()));

        Self {
            name: palette.name().to_string(),
            primary: ColorSpec::Channels(palette.primary().clone()),
            secondary: ColorSpec::Channels(palette.secondary().clone()),
            tertiary: ColorSpec::Channels(palette.tertiary().clone()),
            quaternary,
            danger,
        }
    }

    fn into_palette(self) -> Result<Palette> {
        let resolve = |role: &'static str, spec: &ColorSpec| {
            spec.resolve().map_err(|source| PaletteError::InvalidColor {
                palette: self.name.clone(),
                role,
                source,
            })
        };

        let primary = resolve("primary", &self.primary)?;
        let secondary = resolve("secondary", &self.secondary)?;
        let tertiary = resolve("tertiary", &self.tertiary)?;
        let quaternary = self
            .quaternary
            .as_ref()
            .map(|spec| resolve("quaternary", spec))
            .transpose()?;
        let danger = self
            .danger
            .as_ref()
            .map(|spec| resolve("danger", spec))
            .transpose()?;

        Ok(Palette::with_optional(
            self.name.clone(),
            primary,
            secondary,
            tertiary,
            quaternary,
            danger,
        ))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PaletteDocument {
    #[serde(default, rename = "palette")]
    palettes: Vec<PaletteEntry>,
}

/// Palettes loaded from (or destined for) a TOML file
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteFile {
    palettes: Vec<Palette>,
}

impl PaletteFile {
    pub fn new(palettes: Vec<Palette>) -> Self {
        Self { palettes }
    }

    /// Parse palette TOML. Palette names must be unique within a file.
    pub fn parse(src: &str) -> Result<Self> {
        let document: PaletteDocument = toml::from_str(src)?;

        let mut seen = HashSet::new();
        let mut palettes = Vec::with_capacity(document.palettes.len());
        for entry in document.palettes {
            if !seen.insert(entry.name.clone()) {
                return Err(PaletteError::Duplicate(entry.name));
            }
            palettes.push(entry.into_palette()?);
        }

        Ok(Self { palettes })
    }

    /// Read and parse a palette file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&content)?;
        tracing::debug!(
            "loaded {} palettes from {}",
            file.palettes.len(),
            path.display()
        );
        Ok(file)
    }

    /// Serialize to TOML, writing exact channel values.
    pub fn to_toml(&self) -> Result<String> {
        let document = PaletteDocument {
            palettes: self.palettes.iter().map(PaletteEntry::from_palette).collect(),
        };
        Ok(toml::to_string_pretty(&document)?)
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn into_palettes(self) -> Vec<Palette> {
        self.palettes
    }

    /// Look up a palette by exact name
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BRAND: &str = r##"
[[palette]]
name = "brand"
primary = "#4389C2"
secondary = { red = 10, green = 20, blue = 30 }
tertiary = "DAAF3F"

[[palette]]
name = "brand-wide"
primary = "#4389C2"
secondary = "#95C82E"
tertiary = "#DAAF3F"
quaternary = "#D83A32"
danger = { red = 90, green = 0, blue = 0, alpha = 50 }
"##;

    #[test]
    fn parses_hex_and_channel_colors() {
        let file = PaletteFile::parse(BRAND).unwrap();
        assert_eq!(file.palettes().len(), 2);

        let brand = file.get("brand").unwrap();
        assert_eq!(brand.scheme(), ColorScheme::Triadic);
        assert_eq!(brand.primary(), &Rgb::from_hex(0x4389C2));
        assert_eq!(brand.secondary(), &Rgb::new(10.0, 20.0, 30.0));
        assert_eq!(brand.danger(), &DEFAULT_DANGER);

        let wide = file.get("brand-wide").unwrap();
        assert_eq!(wide.scheme(), ColorScheme::Tetradic);
        assert_eq!(wide.danger(), &Rgb::rgba(90.0, 0.0, 0.0, 50.0));
    }

    #[test]
    fn empty_document_has_no_palettes() {
        assert_eq!(PaletteFile::parse("").unwrap(), PaletteFile::default());
    }

    #[test]
    fn bad_color_names_palette_and_role() {
        let src = r##"
[[palette]]
name = "broken"
primary = "#12"
secondary = "#34"
tertiary = "#ZZ"
"##;
        let err = PaletteFile::parse(src).unwrap_err();
        match err {
            PaletteError::InvalidColor { palette, role, .. } => {
                assert_eq!(palette, "broken");
                assert_eq!(role, "tertiary");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let src = r#"
[[palette]]
name = "twice"
primary = "11"
secondary = "22"
tertiary = "33"

[[palette]]
name = "twice"
primary = "44"
secondary = "55"
tertiary = "66"
"#;
        let err = PaletteFile::parse(src).unwrap_err();
        assert!(matches!(err, PaletteError::Duplicate(name) if name == "twice"));
    }

    #[test]
    fn missing_color_is_a_parse_error() {
        let src = r#"
[[palette]]
name = "short"
primary = "11"
"#;
        assert!(matches!(
            PaletteFile::parse(src),
            Err(PaletteError::Parse(_))
        ));
    }

    #[test]
    fn toml_round_trip_keeps_values() {
        let file = PaletteFile::parse(BRAND).unwrap();
        let written = file.to_toml().unwrap();
        assert_eq!(PaletteFile::parse(&written).unwrap(), file);
    }
}
