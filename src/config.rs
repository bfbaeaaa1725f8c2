use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

/// Top-level Poseidon configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoseidonConfig {
    /// Path to the station table JSON file.
    #[serde(default = "default_stations")]
    pub stations: PathBuf,

    /// Prediction run settings.
    #[serde(default)]
    pub predict: PredictToml,

    /// Output rendering settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl PoseidonConfig {
    /// Loads a configuration file.
    ///
    /// The default `poseidon.toml` may be absent, in which case the
    /// built-in defaults apply. Any other missing path is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            if path == Path::new("poseidon.toml") {
                debug!("no poseidon.toml in the working directory, using defaults");
                return Ok(Self::default());
            }
            bail!("config file not found: {}", path.display());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

impl Default for PoseidonConfig {
    fn default() -> Self {
        Self {
            stations: default_stations(),
            predict: PredictToml::default(),
            output: OutputToml::default(),
        }
    }
}

fn default_stations() -> PathBuf {
    PathBuf::from("stations.json")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictToml {
    /// Shoreline segment id.
    #[serde(default = "default_segment")]
    pub segment: String,
    /// Series start as "YYYY-MM-DD HH:MM"; absent means the current minute.
    #[serde(default)]
    pub start: Option<String>,
    /// Time step between predictions in minutes.
    #[serde(default = "default_interval")]
    pub interval: f64,
    /// Series length in days.
    #[serde(default = "default_length")]
    pub length: f64,
}

impl Default for PredictToml {
    fn default() -> Self {
        Self {
            segment: default_segment(),
            start: None,
            interval: default_interval(),
            length: default_length(),
        }
    }
}

fn default_segment() -> String {
    "497".to_string()
}
fn default_interval() -> f64 {
    60.0
}
fn default_length() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Report row times in Pacific local time with a PST/PDT label.
    #[serde(default = "default_true")]
    pub pacific: bool,
    /// Report row times as Julian Days (only when `pacific` is off).
    #[serde(default)]
    pub julian: bool,
    /// Report heights in feet instead of meters.
    #[serde(default)]
    pub feet: bool,
    /// Delimiter between the time and height columns.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Include the title block above the data rows.
    #[serde(default = "default_true")]
    pub title: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            pacific: true,
            julian: false,
            feet: false,
            delimiter: default_delimiter(),
            title: true,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_delimiter() -> String {
    ",".to_string()
}
