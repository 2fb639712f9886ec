//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without
//! recompiling. Every named constant of the simulation lives here; the
//! compiled-in defaults reproduce the canonical numeric model exactly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use cog_events::AgentClass;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level tuning structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Ticks between synchronous population drift events
    #[serde(default = "default_drift_interval")]
    pub drift_interval: u64,
    /// Minimum Ω required for fact recall
    #[serde(default = "default_omega_threshold")]
    pub omega_threshold: f64,
    /// Drift entropy above which a restart fires
    #[serde(default = "default_drift_threshold")]
    pub drift_threshold: f64,
    /// Validation coherence below which a restart fires
    #[serde(default = "default_validation_threshold")]
    pub validation_threshold: f64,
    /// Per-tick multiplier applied to state and bias
    #[serde(default = "default_decay_rate")]
    pub decay_rate: f64,
    /// Drift constants for ZPE agents
    #[serde(default = "DriftProfile::zpe")]
    pub zpe: DriftProfile,
    /// Drift constants for big-bang entities
    #[serde(default = "DriftProfile::big_bang")]
    pub big_bang: DriftProfile,
}

fn default_drift_interval() -> u64 {
    50
}

fn default_omega_threshold() -> f64 {
    10000.0
}

fn default_drift_threshold() -> f64 {
    0.05
}

fn default_validation_threshold() -> f64 {
    0.85
}

fn default_decay_rate() -> f64 {
    0.999
}

/// Per-class drift constant table.
///
/// The two agent classes share one drift/restart contract and differ
/// only in these four constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftProfile {
    /// Upper bound of the uniform entropy increment per drift step
    pub max_entropy_step: f64,
    /// Fraction of the entropy increment subtracted from coherence
    pub coherence_drop: f64,
    /// Multiplier applied to state and bias on restart
    pub restart_state_mul: f64,
    /// Multiplier applied to the growth factor on restart
    pub restart_growth_mul: f64,
}

impl DriftProfile {
    /// Constants for ZPE agents.
    pub fn zpe() -> Self {
        Self {
            max_entropy_step: 0.1,
            coherence_drop: 0.7,
            restart_state_mul: 0.7,
            restart_growth_mul: 0.98,
        }
    }

    /// Constants for big-bang entities.
    pub fn big_bang() -> Self {
        Self {
            max_entropy_step: 0.07,
            coherence_drop: 0.6,
            restart_state_mul: 0.65,
            restart_growth_mul: 0.95,
        }
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            drift_interval: default_drift_interval(),
            omega_threshold: default_omega_threshold(),
            drift_threshold: default_drift_threshold(),
            validation_threshold: default_validation_threshold(),
            decay_rate: default_decay_rate(),
            zpe: DriftProfile::zpe(),
            big_bang: DriftProfile::big_bang(),
        }
    }
}

impl TuningConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            tracing::warn!("could not load {}: {}. Using defaults.", DEFAULT_TUNING_PATH, e);
            Self::default()
        })
    }

    /// Returns the drift constant table for an agent class.
    pub fn profile(&self, class: AgentClass) -> &DriftProfile {
        match class {
            AgentClass::Zpe => &self.zpe,
            AgentClass::BigBang => &self.big_bang,
        }
    }
}

/// Errors that can occur loading the tuning file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_canonical_model() {
        let config = TuningConfig::default();
        assert_eq!(config.drift_interval, 50);
        assert_eq!(config.omega_threshold, 10000.0);
        assert_eq!(config.drift_threshold, 0.05);
        assert_eq!(config.validation_threshold, 0.85);
        assert_eq!(config.decay_rate, 0.999);
        assert_eq!(config.zpe.max_entropy_step, 0.1);
        assert_eq!(config.zpe.coherence_drop, 0.7);
        assert_eq!(config.big_bang.max_entropy_step, 0.07);
        assert_eq!(config.big_bang.restart_state_mul, 0.65);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: TuningConfig = toml::from_str("drift_interval = 10").unwrap();
        assert_eq!(config.drift_interval, 10);
        assert_eq!(config.omega_threshold, 10000.0);
        assert_eq!(config.zpe.restart_growth_mul, 0.98);
    }

    #[test]
    fn profile_lookup_by_class() {
        let config = TuningConfig::default();
        assert_eq!(config.profile(AgentClass::Zpe).restart_state_mul, 0.7);
        assert_eq!(config.profile(AgentClass::BigBang).restart_state_mul, 0.65);
    }

    #[test]
    fn nested_profile_override() {
        let toml = r#"
            [zpe]
            max_entropy_step = 0.2
            coherence_drop = 0.5
            restart_state_mul = 0.8
            restart_growth_mul = 0.99
        "#;
        let config: TuningConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.zpe.max_entropy_step, 0.2);
        // Untouched class keeps its defaults
        assert_eq!(config.big_bang.max_entropy_step, 0.07);
    }
}
