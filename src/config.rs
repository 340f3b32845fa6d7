//! Run configuration, loadable from TOML.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{error, grid::Bounds, party::PartyTable};

/// Default grid spacing in policy units.
pub const DEFAULT_STEP: f64 = 0.1;

/// Sampling and legislature settings for one run.
///
/// ```toml
/// step = 0.05
/// majority = 51
/// legislature_size = 101
///
/// [bounds]
/// xmin = -10.0
/// xmax = 10.0
/// ymin = -10.0
/// ymax = 10.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Grid spacing on both axes.
    pub step: f64,
    /// Sampling box; defaults to the union of all indifference disks.
    pub bounds: Option<Bounds>,
    /// Overrides the strict-majority threshold.
    pub majority: Option<u32>,
    /// When set, the party seats must sum to exactly this.
    pub legislature_size: Option<u32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { step: DEFAULT_STEP, bounds: None, majority: None, legislature_size: None }
    }
}

impl ModelConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("[config] Failed to parse TOML config")
    }

    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("[config] Invalid config in {}", path.display()))
    }

    /// Apply the legislature settings to a freshly loaded table.
    pub fn apply(&self, mut table: PartyTable) -> error::Result<PartyTable> {
        if let Some(size) = self.legislature_size { table = table.with_legislature_size(size)? }
        if let Some(threshold) = self.majority { table = table.with_majority(threshold)? }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(ModelConfig::from_toml_str("").unwrap(), ModelConfig::default());
    }

    #[test]
    fn full_toml() {
        let cfg = ModelConfig::from_toml_str(r#"
            step = 0.25
            majority = 60
            legislature_size = 101

            [bounds]
            xmin = -5.0
            xmax = 5.0
            ymin = -2.5
            ymax = 2.5
        "#).unwrap();
        assert_eq!(cfg.step, 0.25);
        assert_eq!(cfg.majority, Some(60));
        assert_eq!(cfg.legislature_size, Some(101));
        assert_eq!(cfg.bounds, Some(Bounds::new(-5.0, 5.0, -2.5, 2.5)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ModelConfig::from_toml_str("stepsize = 0.2").is_err());
    }
}
