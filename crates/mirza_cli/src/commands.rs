//! Command implementations
//!
//! Each command renders to a `String` so `main` only has to print it.

use anyhow::{Context, Result};
use mirza_core::Rgb;
use mirza_palette::{builtin_palettes, find_builtin, Palette, PaletteError, PaletteFile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::{MirzaConfig, OutputFormat};

/// Options for `mirza color`
#[derive(clap::Args, Debug, Default)]
pub struct ColorArgs {
    /// Hex color, e.g. "#4389C2", "FF8000" or "80" (gray)
    pub hex: String,

    /// Scale red, green and blue by this factor
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<f64>,

    /// Move toward white (0 to 100) or black (-100 to 0)
    #[arg(long, allow_negative_numbers = true)]
    pub lightness: Option<f64>,

    /// Hex color to mix in
    #[arg(long)]
    pub mix: Option<String>,

    /// Share of the --mix color, 0.0 to 1.0
    #[arg(long, default_value_t = 0.5)]
    pub percent: f64,

    /// Also print the light-to-dark variant sequence
    #[arg(long)]
    pub variants: bool,
}

#[derive(Serialize)]
struct ColorReport<'a> {
    hex: String,
    #[serde(flatten)]
    color: &'a Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    variants: Option<Vec<String>>,
}

impl<'a> ColorReport<'a> {
    fn new(color: &'a Rgb, with_variants: bool) -> Self {
        Self {
            hex: color.to_hex(),
            color,
            variants: with_variants
                .then(|| color.variants().iter().map(Rgb::to_hex).collect()),
        }
    }
}

#[derive(Serialize)]
struct PaletteReport<'a> {
    scheme: String,
    #[serde(flatten)]
    palette: &'a Palette,
    swatches: Vec<Vec<String>>,
}

/// `mirza color`
pub fn color(args: &ColorArgs, format: OutputFormat) -> Result<String> {
    let mut color = Rgb::from_hex_str(&args.hex)
        .with_context(|| format!("Invalid color {:?}", args.hex))?;

    if let Some(modifier) = args.brightness {
        color = color.brightness(modifier);
    }
    if let Some(modifier) = args.lightness {
        color = color.lightness(modifier);
    }
    if let Some(other) = &args.mix {
        let other = Rgb::from_hex_str(other)
            .with_context(|| format!("Invalid --mix color {other:?}"))?;
        color = color.mix(&other, args.percent);
    }
    tracing::info!("derived color {}", color);

    let report = ColorReport::new(&color, args.variants);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            let mut out = format!("{}  {}", report.hex, color);
            if let Some(variants) = report.variants {
                out.push('\n');
                out.push_str(&variants.join(" "));
            }
            Ok(out)
        }
    }
}

/// Built-in palettes followed by the ones from configured files
pub fn all_palettes(config: &MirzaConfig) -> Result<Vec<Palette>> {
    let mut palettes = builtin_palettes().to_vec();
    for path in config.palette_files() {
        let file = PaletteFile::load(&path)?;
        palettes.extend(file.into_palettes());
    }
    Ok(palettes)
}

/// Find a palette by name, preferring configured files over built-ins.
pub fn find_palette(config: &MirzaConfig, name: &str) -> Result<Palette> {
    for path in config.palette_files() {
        let file = PaletteFile::load(&path)?;
        if let Some(palette) = file.get(name) {
            return Ok(palette.clone());
        }
    }
    find_builtin(name)
        .cloned()
        .ok_or_else(|| PaletteError::Unknown(name.to_string()).into())
}

/// `mirza palettes`
pub fn list_palettes(palettes: &[Palette], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(palettes)?),
        OutputFormat::Text => Ok(palettes
            .iter()
            .map(|palette| {
                let hexes: Vec<String> = palette.values().iter().map(|c| c.to_hex()).collect();
                format!(
                    "{:<14} {:<9} {}",
                    palette.name(),
                    palette.scheme(),
                    hexes.join(" ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// `mirza palette`
pub fn show_palette(palette: &Palette, format: OutputFormat) -> Result<String> {
    let swatches: Vec<Vec<String>> = palette
        .variants()
        .iter()
        .map(|variants| variants.iter().map(Rgb::to_hex).collect())
        .collect();

    match format {
        OutputFormat::Json => {
            let report = PaletteReport {
                scheme: palette.scheme().to_string(),
                palette,
                swatches,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text => {
            let mut lines = vec![palette.to_string()];
            lines.extend(swatches.iter().map(|row| row.join(" ")));
            Ok(lines.join("\n"))
        }
    }
}

/// `mirza random`
pub fn random(count: usize, seed: Option<u64>, format: OutputFormat) -> Result<String> {
    let colors: Vec<Rgb> = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count).map(|_| Rgb::random_with(&mut rng)).collect()
        }
        None => (0..count).map(|_| Rgb::random()).collect(),
    };

    match format {
        OutputFormat::Json => {
            let reports: Vec<ColorReport<'_>> =
                colors.iter().map(|c| ColorReport::new(c, false)).collect();
            Ok(serde_json::to_string_pretty(&reports)?)
        }
        OutputFormat::Text => Ok(colors
            .iter()
            .map(|c| format!("{}  {}", c.to_hex(), c))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirza_palette::PalettePreset;
    use pretty_assertions::assert_eq;

    fn color_args(hex: &str) -> ColorArgs {
        ColorArgs {
            hex: hex.to_string(),
            percent: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn color_text_output() {
        let out = color(&color_args("#FFFF00"), OutputFormat::Text).unwrap();
        assert_eq!(out, "#FFFF00  r:100, g:100, b:0");
    }

    #[test]
    fn color_applies_mix() {
        let args = ColorArgs {
            mix: Some("FFFFFF".to_string()),
            percent: 0.2,
            ..color_args("FF0000")
        };
        let out = color(&args, OutputFormat::Text).unwrap();
        assert_eq!(out, "#FF3333  r:100, g:20, b:20");
    }

    #[test]
    fn color_lists_variants() {
        let args = ColorArgs {
            variants: true,
            ..color_args("000000")
        };
        let out = color(&args, OutputFormat::Text).unwrap();
        let variants: Vec<&str> = out.lines().nth(1).unwrap().split(' ').collect();
        assert_eq!(variants.len(), 8);
        assert_eq!(variants[4], "#000000");
    }

    #[test]
    fn color_json_output() {
        let out = color(&color_args("00FF00"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["hex"], "#00FF00");
        assert_eq!(value["green"], 100.0);
        assert!(value.get("variants").is_none());
    }

    #[test]
    fn invalid_color_is_reported() {
        let err = color(&color_args("nope"), OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("Invalid color"));
    }

    #[test]
    fn palette_listing_has_one_line_per_palette() {
        let out = list_palettes(builtin_palettes(), OutputFormat::Text).unwrap();
        assert_eq!(out.lines().count(), builtin_palettes().len());
        assert!(out.lines().next().unwrap().starts_with("fun"));
    }

    #[test]
    fn show_palette_prints_swatch_rows() {
        let palette = PalettePreset::Social.palette();
        let out = show_palette(palette, OutputFormat::Text).unwrap();
        // description plus one row per value
        assert_eq!(out.lines().count(), 1 + 5);
    }

    #[test]
    fn find_palette_falls_back_to_builtins() {
        let config = MirzaConfig::default();
        let palette = find_palette(&config, "nature").unwrap();
        assert_eq!(palette.name(), "default");
        assert!(find_palette(&config, "mauve").is_err());
    }

    #[test]
    fn seeded_random_is_repeatable() {
        let a = random(3, Some(9), OutputFormat::Text).unwrap();
        let b = random(3, Some(9), OutputFormat::Text).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.lines().count(), 3);
    }
}
