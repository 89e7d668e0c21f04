//! Mirza configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory when no `--config` is given
pub const CONFIG_FILE: &str = "mirza.toml";

/// Top-level Mirza configuration (mirza.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MirzaConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub palettes: PalettesConfig,
    /// Directory relative palette paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Output configuration
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Palette sources
#[derive(Debug, Deserialize, Serialize)]
pub struct PalettesConfig {
    /// Extra palette files (TOML)
    #[serde(default)]
    pub files: Vec<PathBuf>,
    /// Palette shown by `mirza palette` without a name
    #[serde(default = "default_palette")]
    pub default: String,
}

fn default_palette() -> String {
    "fun".to_string()
}

impl Default for PalettesConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            default: default_palette(),
        }
    }
}

impl MirzaConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `mirza.toml` in the current
    /// directory is used if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let candidate = PathBuf::from(CONFIG_FILE);
                if !candidate.exists() {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        tracing::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Parse configuration TOML
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Palette files with relative paths resolved against the config directory
    pub fn palette_files(&self) -> Vec<PathBuf> {
        self.palettes
            .files
            .iter()
            .map(|file| {
                if file.is_absolute() {
                    file.clone()
                } else {
                    self.base_dir.join(file)
                }
            })
            .collect()
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
