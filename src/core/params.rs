use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::processing::trim::DEFAULT_THRESHOLD;
use crate::error::{Error, Result};
use crate::types::PadSpec;

/// Parameters for one padded reconstruction run, suitable for config files.
///
/// Values are immutable once built; the `with_*` methods return an updated copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconParams {
    pub pad: PadSpec,
    /// Iterations handed to iterative engines (SIRT); ignored by direct methods
    pub num_iter: usize,
    /// Center of rotation in unpadded detector columns; None lets the engine decide
    pub center: Option<f64>,
    /// Magnitude threshold used when trimming results
    pub threshold: f32,
}

impl Default for ReconParams {
    fn default() -> Self {
        Self {
            pad: PadSpec::new(10, 10),
            num_iter: 1,
            center: None,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ReconParams {
    pub fn with_pad(&self, pad: PadSpec) -> Self {
        Self {
            pad,
            ..self.clone()
        }
    }

    pub fn with_center(&self, center: Option<f64>) -> Self {
        Self {
            center,
            ..self.clone()
        }
    }

    pub fn with_num_iter(&self, num_iter: usize) -> Self {
        Self {
            num_iter,
            ..self.clone()
        }
    }

    pub fn with_threshold(&self, threshold: f32) -> Self {
        Self {
            threshold,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_iter == 0 {
            return Err(Error::invalid("params", "num_iter must be at least 1"));
        }
        if let Some(c) = self.center {
            if !c.is_finite() {
                return Err(Error::invalid("params", format!("center must be finite, got {c}")));
            }
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(Error::invalid(
                "params",
                format!("threshold must be finite and >= 0, got {}", self.threshold),
            ));
        }
        Ok(())
    }

    /// Parses JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let params: ReconParams = serde_json::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading reconstruction parameters from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
