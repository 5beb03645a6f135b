//! Configuration for the validation engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{EngineError, Result};

/// Configuration for a validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Skills with a risk score at or above this are excluded
    pub exclusion_threshold: u32,
    /// Scoring configuration
    pub scoring: ScoringConfig,
    /// Risk configuration
    pub risk: RiskConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exclusion_threshold: 60,
            scoring: ScoringConfig::default(),
            risk: RiskConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Load config from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&yaml).map_err(|e| EngineError::Config(e.to_string()))
    }
}

/// Confidence scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Activity within this many days earns the full bonus
    pub very_recent_days: i64,
    /// Activity within this many days earns the reduced bonus
    pub recent_days: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            very_recent_days: 90,
            recent_days: 180,
        }
    }
}

/// Risk assessment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Risk score at or above this marks a skill as a hallucination
    pub hallucination_threshold: u32,
    /// Activity older than this many days counts as stale
    pub stale_after_days: i64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            hallucination_threshold: 60,
            stale_after_days: 365,
        }
    }
}
