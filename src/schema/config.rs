//! Configuration types for the Firefly algorithm parameters.

use serde::{Deserialize, Serialize};

fn default_generations() -> i64 {
    1
}
fn default_alpha() -> f64 {
    0.01
}
fn default_beta() -> f64 {
    1.0
}
fn default_gamma() -> f64 {
    0.01
}

/// Parameters of a Firefly run.
///
/// `generations` is signed so that a negative count read from a file or
/// passed by a caller can be reported instead of silently wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireflyConfig {
    /// Number of generations performed by each `evolve` call.
    #[serde(default = "default_generations")]
    pub generations: i64,
    /// Width of the random perturbation, relative to the bounds (0.0-1.0).
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Maximum attractiveness, reached at distance zero (0.0-1.0).
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Absorption coefficient before normalization by the swarm span (0.0-1.0).
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

impl Default for FireflyConfig {
    fn default() -> Self {
        Self {
            generations: default_generations(),
            alpha: default_alpha(),
            beta: default_beta(),
            gamma: default_gamma(),
        }
    }
}

impl FireflyConfig {
    /// Validate parameter ranges, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generations < 0 {
            return Err(ConfigError::NegativeGenerations(self.generations));
        }
        if !unit_interval(self.alpha) {
            return Err(ConfigError::AlphaOutOfRange(self.alpha));
        }
        if !unit_interval(self.beta) {
            return Err(ConfigError::BetaOutOfRange(self.beta));
        }
        if !unit_interval(self.gamma) {
            return Err(ConfigError::GammaOutOfRange(self.gamma));
        }
        Ok(())
    }
}

/// NaN fails both comparisons and is rejected.
fn unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Number of generations must be non-negative, got {0}")]
    NegativeGenerations(i64),
    #[error("alpha should be in [0,1], got {0}")]
    AlphaOutOfRange(f64),
    #[error("beta should be in [0,1], got {0}")]
    BetaOutOfRange(f64),
    #[error("gamma should be in [0,1], got {0}")]
    GammaOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(FireflyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_boundary_values_accepted() {
        for value in [0.0, 1.0] {
            let config = FireflyConfig {
                generations: 0,
                alpha: value,
                beta: value,
                gamma: value,
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_first_violation_reported() {
        let config = FireflyConfig {
            generations: -1,
            alpha: -0.1,
            beta: 1.7,
            gamma: 2.0,
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeGenerations(-1)));

        let config = FireflyConfig {
            generations: 10,
            ..config
        };
        assert_eq!(config.validate(), Err(ConfigError::AlphaOutOfRange(-0.1)));
    }

    #[test]
    fn test_nan_rejected() {
        let config = FireflyConfig {
            gamma: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GammaOutOfRange(_))
        ));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: FireflyConfig = serde_json::from_str(r#"{"generations": 50}"#).unwrap();
        assert_eq!(config.generations, 50);
        assert_eq!(config.alpha, 0.01);
        assert_eq!(config.beta, 1.0);
        assert_eq!(config.gamma, 0.01);
    }
}
