use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MatchEngineError, Result};
use crate::matching::Metric;

/// Default acceptance threshold on the matcher's 0-100 scale
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Default alignment reward for a matching character
pub const DEFAULT_MATCH_REWARD: u32 = 2;

/// Default alignment penalty for a gap
pub const DEFAULT_GAP_COST: u32 = 1;

/// Resolver options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Minimum matcher score (inclusive) for a match to be accepted
    pub threshold: f64,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ResolverOptions {
    /// Create options with a custom threshold
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        let options = Self { threshold };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=100.0).contains(&self.threshold) {
            return Err(MatchEngineError::InvalidConfig(format!(
                "threshold must be within 0..=100, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Scoring parameters for local alignment.
///
/// `mismatch_penalty` falls back to `match_reward` when unset, so a mismatch
/// costs exactly what a match earns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentParams {
    pub match_reward: u32,
    pub gap_cost: u32,
    pub mismatch_penalty: Option<u32>,
}

impl Default for AlignmentParams {
    fn default() -> Self {
        Self {
            match_reward: DEFAULT_MATCH_REWARD,
            gap_cost: DEFAULT_GAP_COST,
            mismatch_penalty: None,
        }
    }
}

impl AlignmentParams {
    pub fn new(match_reward: u32, gap_cost: u32) -> Result<Self> {
        let params = Self {
            match_reward,
            gap_cost,
            mismatch_penalty: None,
        };
        params.validate()?;
        Ok(params)
    }

    /// Override the mismatch penalty (zero is allowed)
    pub fn with_mismatch_penalty(mut self, penalty: u32) -> Self {
        self.mismatch_penalty = Some(penalty);
        self
    }

    /// Effective mismatch penalty
    pub fn mismatch_penalty(&self) -> u32 {
        self.mismatch_penalty.unwrap_or(self.match_reward)
    }

    pub fn validate(&self) -> Result<()> {
        if self.match_reward == 0 {
            return Err(MatchEngineError::InvalidConfig(
                "match_reward must be positive".to_string(),
            ));
        }
        if self.gap_cost == 0 {
            return Err(MatchEngineError::InvalidConfig(
                "gap_cost must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Full engine configuration, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub resolver: ResolverOptions,
    pub alignment: AlignmentParams,
    pub metric: Metric,
}

impl EngineConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.resolver.validate()?;
        self.alignment.validate()
    }
}
