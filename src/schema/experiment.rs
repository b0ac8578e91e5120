//! Experiment description for running an optimizer on a benchmark problem.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConfigError, FireflyConfig};

/// Benchmark function selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BenchmarkKind {
    /// Sum of squares.
    #[default]
    Sphere,
    /// Highly multimodal cosine-modulated sphere.
    Rastrigin,
    /// Banana-shaped valley.
    Rosenbrock,
    /// Nearly flat outer region with a central funnel.
    Ackley,
}

impl BenchmarkKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sphere => "Sphere",
            Self::Rastrigin => "Rastrigin",
            Self::Rosenbrock => "Rosenbrock",
            Self::Ackley => "Ackley",
        }
    }

    /// Customary search box `(lower, upper)` applied to every coordinate.
    pub fn default_box(&self) -> (f64, f64) {
        match self {
            Self::Sphere | Self::Rastrigin => (-5.12, 5.12),
            Self::Rosenbrock => (-5.0, 10.0),
            Self::Ackley => (-15.0, 30.0),
        }
    }

    pub fn min_dimension(&self) -> usize {
        match self {
            Self::Rosenbrock => 2,
            _ => 1,
        }
    }
}

/// Problem section of an experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// Benchmark function.
    #[serde(default)]
    pub benchmark: BenchmarkKind,
    /// Number of decision variables.
    pub dimension: usize,
    /// Optional `(lower, upper)` box overriding the benchmark default.
    #[serde(default)]
    pub bounds: Option<(f64, f64)>,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            benchmark: BenchmarkKind::default(),
            dimension: 10,
            bounds: None,
        }
    }
}

fn default_population_size() -> usize {
    20
}
fn default_evolutions() -> usize {
    10
}

/// Top-level configuration consumed by the command-line driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Problem to optimize.
    pub problem: ProblemConfig,
    /// Algorithm parameters.
    #[serde(default)]
    pub algorithm: FireflyConfig,
    /// Number of individuals.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Number of consecutive `evolve` calls on the same population.
    #[serde(default = "default_evolutions")]
    pub evolutions: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            problem: ProblemConfig::default(),
            algorithm: FireflyConfig {
                generations: 20,
                ..Default::default()
            },
            population_size: default_population_size(),
            evolutions: default_evolutions(),
            random_seed: Some(42),
        }
    }
}

impl ExperimentConfig {
    /// Load an experiment from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExperimentError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Validate the experiment.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        self.algorithm.validate()?;

        if self.population_size < 2 {
            return Err(ExperimentError::PopulationTooSmall(self.population_size));
        }

        let required = self.problem.benchmark.min_dimension();
        if self.problem.dimension < required {
            return Err(ExperimentError::InvalidDimension {
                benchmark: self.problem.benchmark.name(),
                required,
                dimension: self.problem.dimension,
            });
        }

        if let Some((lower, upper)) = self.problem.bounds
            && (lower > upper || !(upper - lower).is_finite())
        {
            return Err(ExperimentError::InvalidBounds { lower, upper });
        }

        Ok(())
    }
}

/// Experiment loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    #[error("Failed to read experiment file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse experiment file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Algorithm config validation failed: {0}")]
    Algorithm(#[from] ConfigError),
    #[error("Population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("{benchmark} requires at least {required} dimensions, got {dimension}")]
    InvalidDimension {
        benchmark: &'static str,
        required: usize,
        dimension: usize,
    },
    #[error("Invalid bounds: lower ({lower}) > upper ({upper})")]
    InvalidBounds { lower: f64, upper: f64 },
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_experiment_valid() {
        assert!(ExperimentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let config = ExperimentConfig {
            population_size: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ExperimentError::PopulationTooSmall(1))
        ));

        let config = ExperimentConfig {
            problem: ProblemConfig {
                benchmark: BenchmarkKind::Rosenbrock,
                dimension: 1,
                bounds: None,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ExperimentError::InvalidDimension { required: 2, .. })
        ));

        let config = ExperimentConfig {
            problem: ProblemConfig {
                bounds: Some((1.0, -1.0)),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ExperimentError::InvalidBounds { .. })
        ));

        let config = ExperimentConfig {
            problem: ProblemConfig {
                bounds: Some((-1e308, 1e308)),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ExperimentError::InvalidBounds { .. })
        ));

        let mut config = ExperimentConfig::default();
        config.algorithm.beta = 1.7;
        assert!(matches!(
            config.validate(),
            Err(ExperimentError::Algorithm(ConfigError::BetaOutOfRange(_)))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "problem": {{ "benchmark": "Rastrigin", "dimension": 3 }},
                "algorithm": {{ "generations": 5, "alpha": 0.05 }},
                "random_seed": 7
            }}"#
        )
        .unwrap();

        let config = ExperimentConfig::from_file(file.path()).unwrap();
        assert_eq!(config.problem.benchmark, BenchmarkKind::Rastrigin);
        assert_eq!(config.problem.dimension, 3);
        assert_eq!(config.algorithm.generations, 5);
        assert_eq!(config.algorithm.beta, 1.0);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.random_seed, Some(7));
    }

    #[test]
    fn test_load_errors() {
        let missing = ExperimentConfig::from_file("/nonexistent/experiment.json");
        assert!(matches!(missing, Err(ExperimentError::Io(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            ExperimentConfig::from_file(file.path()),
            Err(ExperimentError::Parse(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = ExperimentConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ExperimentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.population_size, config.population_size);
        assert_eq!(parsed.algorithm, config.algorithm);
    }
}
