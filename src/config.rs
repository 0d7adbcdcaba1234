use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from
/// `.license-detectr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Detection threshold overrides.
    #[serde(default)]
    pub detection: DetectionConfig,
}

/// Thresholds driving the ambiguity rule.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    /// A detection below this combined score is flagged ambiguous.
    /// Default: 0.8.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    /// A detection whose top two candidates are closer than this margin is
    /// flagged ambiguous even above the confidence threshold. Default: 0.15.
    #[serde(default = "default_tie_margin")]
    pub tie_margin: f64,
}

fn default_confidence_threshold() -> f64 {
    0.8
}

fn default_tie_margin() -> f64 {
    0.15
}

impl Default for DetectionConfig {
    fn default() -> Self {
        DetectionConfig {
            confidence_threshold: default_confidence_threshold(),
            tie_margin: default_tie_margin(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.license-detectr/config.toml`
/// 3. `~/.config/license-detectr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".license-detectr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-detectr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
