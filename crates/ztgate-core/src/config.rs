use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Risk cut-offs (the `[thresholds]` section of config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Trusted devices scoring at or above this go to manual review.
    pub allow_threshold: f64,
    /// Scores at or above this are blocked regardless of device.
    pub high_risk: f64,
    /// Untrusted devices scoring above this are blocked instead of reviewed.
    pub device_risk: f64,
    /// Heuristic scores at or above this skip the scoring model.
    pub heuristic_confidence: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            allow_threshold: 0.5,
            high_risk: 0.85,
            device_risk: 0.3,
            heuristic_confidence: 0.7,
        }
    }
}

/// Rejected configuration. Checked once at startup, never per request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold `{name}` must be a number in [0, 1], got {value}")]
    OutOfRange { name: &'static str, value: f64 },
    #[error("allow_threshold ({allow}) must not exceed high_risk ({high})")]
    Inverted { allow: f64, high: f64 },
}

impl ThresholdConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("allow_threshold", self.allow_threshold),
            ("high_risk", self.high_risk),
            ("device_risk", self.device_risk),
            ("heuristic_confidence", self.heuristic_confidence),
        ];
        for (name, value) in named {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { name, value });
            }
        }
        if self.allow_threshold > self.high_risk {
            return Err(ConfigError::Inverted {
                allow: self.allow_threshold,
                high: self.high_risk,
            });
        }
        Ok(())
    }
}

/// Global configuration loaded from `~/.config/ztgate/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Optional scoring model (JSON logistic model). None = heuristics only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<PathBuf>,
    /// Optional audit log location; defaults to the XDG state dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_log: Option<PathBuf>,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

impl GateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()
    }

    /// Audit log path: configured value, or `~/.local/state/ztgate/decisions.log`.
    pub fn audit_log_path(&self) -> Result<PathBuf> {
        match &self.audit_log {
            Some(p) => Ok(p.clone()),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix("ztgate")?;
                Ok(xdg_dirs.place_state_file("decisions.log")?)
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ztgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GateConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] with an explicit path. The result is validated.
pub fn load_or_init_at(path: &Path) -> Result<GateConfig> {
    if !path.exists() {
        let default_cfg = GateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GateConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid configuration in {}", path.display()))?;
    Ok(cfg)
}
