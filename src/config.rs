// src/config.rs
//! Run parameters for the alert counter: window length, threshold and the
//! per-minute call samples. Values are taken as-is; range checks happen in
//! `alerts`.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const ENV_CONFIG_PATH: &str = "ALERTS_CONFIG_PATH";
pub const ENV_WINDOW_MINUTES: &str = "ALERT_WINDOW_MINUTES";
pub const ENV_THRESHOLD: &str = "ALERT_THRESHOLD";

pub const DEFAULT_CONFIG_TOML: &str = "config/alerts.toml";
pub const DEFAULT_CONFIG_JSON: &str = "config/alerts.json";

pub const DEFAULT_WINDOW_LENGTH: i64 = 3;
pub const DEFAULT_THRESHOLD: i64 = 4;
pub const DEFAULT_SAMPLES: [i64; 8] = [2, 2, 2, 2, 5, 5, 5, 8];

fn default_window_length() -> i64 {
    DEFAULT_WINDOW_LENGTH
}
fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD
}
fn default_samples() -> Vec<i64> {
    DEFAULT_SAMPLES.to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlertConfig {
    /// Trailing minutes per window.
    #[serde(default = "default_window_length")]
    pub window_length: i64,
    #[serde(default = "default_threshold")]
    pub threshold: i64,
    /// Calls per minute, index = minute offset.
    #[serde(default = "default_samples")]
    pub samples: Vec<i64>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            window_length: DEFAULT_WINDOW_LENGTH,
            threshold: DEFAULT_THRESHOLD,
            samples: default_samples(),
        }
    }
}

impl AlertConfig {
    /// Load from an explicit path. Supports TOML or JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading alert config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        parse_config(&content, ext.as_str())
            .with_context(|| format!("parsing alert config {}", path.display()))
    }

    /// Load using env var + fallbacks:
    /// 1) $ALERTS_CONFIG_PATH
    /// 2) config/alerts.toml
    /// 3) config/alerts.json
    /// 4) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
        for p in [DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_JSON] {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
        }
        Ok(Self::default())
    }

    /// Replace window length / threshold from ALERT_WINDOW_MINUTES / ALERT_THRESHOLD.
    /// Unparsable values are logged and ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = parse_int_env(ENV_WINDOW_MINUTES) {
            self.window_length = v;
        }
        if let Some(v) = parse_int_env(ENV_THRESHOLD) {
            self.threshold = v;
        }
    }
}

fn parse_int_env(name: &str) -> Option<i64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(var = name, value = %raw, "ignoring env override: {e}");
            None
        }
    }
}

fn parse_config(s: &str, hint_ext: &str) -> Result<AlertConfig> {
    // JSON documents start with an object brace; anything else is tried as TOML.
    let looks_json =
        hint_ext == "json" || (hint_ext != "toml" && s.trim_start().starts_with('{'));
    if looks_json {
        serde_json::from_str(s).context("invalid JSON alert config")
    } else {
        toml::from_str(s).context("invalid TOML alert config")
    }
}
