//! Configuration file support for component-metrics.
//!
//! Provides YAML-based configuration through `component-metrics.config.yml`
//! files, including data structures, file loading, and validation. The only
//! tunable surface is the risk-score weighting; everything else about the
//! core is fixed behavior.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::metrics::policies::RiskWeights;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "component-metrics.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub risk_weights: Option<RiskWeightsConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Partial risk-weight overrides; omitted fields keep their canonical
/// defaults.
#[derive(Debug, Deserialize, Default)]
pub struct RiskWeightsConfig {
    pub critical: Option<f64>,
    pub high: Option<f64>,
    pub medium: Option<f64>,
    pub low: Option<f64>,
    pub unassigned: Option<f64>,
}

impl ConfigFile {
    /// Resolves the effective weights: file overrides merged over the
    /// canonical defaults.
    pub fn risk_weights(&self) -> RiskWeights {
        let defaults = RiskWeights::default();
        let Some(overrides) = &self.risk_weights else {
            return defaults;
        };
        RiskWeights {
            critical: overrides.critical.unwrap_or(defaults.critical),
            high: overrides.high.unwrap_or(defaults.high),
            medium: overrides.medium.unwrap_or(defaults.medium),
            low: overrides.low.unwrap_or(defaults.low),
            unassigned: overrides.unassigned.unwrap_or(defaults.unassigned),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config
        .risk_weights()
        .validate()
        .context("Invalid config: risk_weights")
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}
