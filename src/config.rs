use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level annum configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnumConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Quantization settings.
    #[serde(default)]
    pub scale: ScaleToml,

    /// Rendering settings.
    #[serde(default)]
    pub render: RenderToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_date_col")]
    pub date_col: String,
    #[serde(default = "default_value_col")]
    pub value_col: String,
    #[serde(default = "default_label_col")]
    pub label_col: Option<String>,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            date_col: default_date_col(),
            value_col: default_value_col(),
            label_col: default_label_col(),
        }
    }
}

fn default_date_col() -> String {
    "date".to_string()
}
fn default_value_col() -> String {
    "value".to_string()
}
fn default_label_col() -> Option<String> {
    Some("label".to_string())
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleToml {
    /// Lower domain bound; derived from the data when absent.
    pub domain_min: Option<f64>,
    /// Upper domain bound; derived from the data when absent.
    pub domain_max: Option<f64>,
    /// Number of quantization buckets (ten when absent).
    #[serde(default)]
    pub buckets: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderToml {
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
    #[serde(default = "default_palette")]
    pub palette: String,
    #[serde(default = "default_neutral_fill")]
    pub neutral_fill: String,
    #[serde(default = "default_true")]
    pub year_labels: bool,
}

impl Default for RenderToml {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            palette: default_palette(),
            neutral_fill: default_neutral_fill(),
            year_labels: true,
        }
    }
}

fn default_cell_size() -> f64 {
    17.0
}
fn default_palette() -> String {
    "greens".to_string()
}
fn default_neutral_fill() -> String {
    "#eeeeee".to_string()
}
fn default_true() -> bool {
    true
}

impl AnnumConfig {
    /// Loads the configuration from a TOML file, falling back to defaults
    /// when the file does not exist (paths must then come from the CLI).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
