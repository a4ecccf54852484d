//! Run parameters supplied ahead of time through a JSON file or flags.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use vecspan_linalg::{LinalgError, RunConfig};

/// Any subset of the run parameters. Missing values are prompted for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresetConfig {
    pub n: Option<i64>,
    pub r: Option<i64>,
    pub lower: Option<i64>,
    pub upper: Option<i64>,
    pub seed: Option<u64>,
}

impl PresetConfig {
    /// Values set in `other` win.
    pub fn overridden_by(self, other: PresetConfig) -> Self {
        Self {
            n: other.n.or(self.n),
            r: other.r.or(self.r),
            lower: other.lower.or(self.lower),
            upper: other.upper.or(self.upper),
            seed: other.seed.or(self.seed),
        }
    }

    /// All four run parameters are known, so nothing will be prompted.
    pub fn is_complete(&self) -> bool {
        self.to_run_config().is_some()
    }

    /// Check the values that are set. Preset values are never prompted for,
    /// so a bad one cannot be corrected interactively.
    pub fn validate(&self) -> Result<(), LinalgError> {
        if let Some(n) = self.n.filter(|&n| n < 1) {
            return Err(LinalgError::InvalidDimension(n));
        }
        if self.r.map_or(false, |r| r < 1) {
            return Err(LinalgError::EmptyInput);
        }
        if let (Some(lower), Some(upper)) = (self.lower, self.upper) {
            if lower >= upper {
                return Err(LinalgError::EmptyRange { lower, upper });
            }
        }
        Ok(())
    }

    pub fn to_run_config(&self) -> Option<RunConfig> {
        Some(RunConfig {
            n: self.n?,
            r: self.r?,
            lower: self.lower?,
            upper: self.upper?,
            seed: self.seed,
        })
    }
}

impl From<RunConfig> for PresetConfig {
    fn from(value: RunConfig) -> Self {
        Self {
            n: Some(value.n),
            r: Some(value.r),
            lower: Some(value.lower),
            upper: Some(value.upper),
            seed: value.seed,
        }
    }
}

/// Load preset run parameters from a JSON file.
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<PresetConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: PresetConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
