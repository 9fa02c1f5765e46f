use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::Error;
use crate::fusion::DEFAULT_RRF_K;

/// Fusion settings loaded from file + environment.
///
/// Reads the TOML file named by `RANKFUSE_CONFIG` (default `rankfuse.toml`)
/// when present, then applies `RANKFUSE_*` environment overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FusionSettings {
    pub strategy: FusionStrategy,
    /// Damping constant for reciprocal rank contributions. Smaller values
    /// concentrate weight on top ranks, larger values flatten the curve.
    pub k: f32,
    /// Optional per-source weights for the weighted strategy, one per
    /// result list. Unset means every source weighs 1.0.
    pub weights: Option<Vec<f32>>,
}

impl Default for FusionSettings {
    fn default() -> Self {
        Self {
            strategy: FusionStrategy::default(),
            k: DEFAULT_RRF_K,
            weights: None,
        }
    }
}

impl FusionSettings {
    /// Load settings from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("RANKFUSE_CONFIG").unwrap_or_else(|_| "rankfuse.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RANKFUSE")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let settings: Self = settings.try_deserialize()?;

        settings.validate().context("invalid fusion settings")?;

        Ok(settings)
    }

    /// Check that the damping constant and per-source weights are usable.
    /// Out-of-range values are reported, never clamped.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(Error::invalid_config(format!(
                "damping constant k must be a positive finite number, got {}",
                self.k
            )));
        }

        if let Some(weights) = &self.weights {
            if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
                return Err(Error::invalid_config(
                    "per-source weights must be positive finite numbers",
                ));
            }
        }

        Ok(())
    }
}

/// Fusion strategy selector
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FusionStrategy {
    /// Reciprocal rank fusion: rank positions matter, score scales do not.
    #[default]
    Rrf,
    /// Weighted score averaging: preserves score magnitudes across sources.
    Weighted,
}
