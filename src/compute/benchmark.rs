//! Classic continuous test functions used to exercise the optimizers.
//!
//! All of them are single objective, box constrained and minimized, with
//! the global optimum value at zero.

use std::f64::consts::{E, PI};

use crate::schema::BenchmarkKind;

use super::problem::{Bounds, Problem, ProblemError};

/// A benchmark function bound to a search box.
#[derive(Debug, Clone)]
pub struct BenchmarkProblem {
    kind: BenchmarkKind,
    bounds: Bounds,
}

impl BenchmarkProblem {
    /// Create a benchmark on its customary box.
    pub fn new(kind: BenchmarkKind, dimension: usize) -> Result<Self, ProblemError> {
        let (lower, upper) = kind.default_box();
        Self::with_bounds(kind, Bounds::uniform(dimension, lower, upper)?)
    }

    /// Create a benchmark on a custom box.
    pub fn with_bounds(kind: BenchmarkKind, bounds: Bounds) -> Result<Self, ProblemError> {
        let required = kind.min_dimension();
        if bounds.dimension() < required {
            return Err(ProblemError::DimensionTooSmall {
                name: kind.name(),
                required,
                dimension: bounds.dimension(),
            });
        }
        Ok(Self { kind, bounds })
    }

    pub fn kind(&self) -> BenchmarkKind {
        self.kind
    }
}

impl Problem for BenchmarkProblem {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn objfun(&self, x: &[f64]) -> Vec<f64> {
        let value = match self.kind {
            BenchmarkKind::Sphere => sphere(x),
            BenchmarkKind::Rastrigin => rastrigin(x),
            BenchmarkKind::Rosenbrock => rosenbrock(x),
            BenchmarkKind::Ackley => ackley(x),
        };
        vec![value]
    }
}

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

fn rastrigin(x: &[f64]) -> f64 {
    let omega = 2.0 * PI;
    10.0 * x.len() as f64
        + x.iter()
            .map(|v| v * v - 10.0 * (omega * v).cos())
            .sum::<f64>()
}

fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (w[0] - 1.0).powi(2))
        .sum()
}

fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_sq = x.iter().map(|v| v * v).sum::<f64>() / n;
    let mean_cos = x.iter().map(|v| (2.0 * PI * v).cos()).sum::<f64>() / n;
    20.0 + E - 20.0 * (-0.2 * mean_sq.sqrt()).exp() - mean_cos.exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimum_values() {
        let origin = [0.0; 4];
        let ones = [1.0; 4];

        assert!(sphere(&origin).abs() < 1e-12);
        assert!(rastrigin(&origin).abs() < 1e-12);
        assert!(rosenbrock(&ones).abs() < 1e-12);
        assert!(ackley(&origin).abs() < 1e-12);
    }

    #[test]
    fn test_known_values() {
        assert!((sphere(&[1.0, 2.0]) - 5.0).abs() < 1e-12);
        assert!((rastrigin(&[1.0]) - 1.0).abs() < 1e-12);
        assert!((rosenbrock(&[0.0, 0.0]) - 1.0).abs() < 1e-12);
        assert!(ackley(&[1.0, 1.0]) > 0.0);
    }

    #[test]
    fn test_default_boxes() {
        let problem = BenchmarkProblem::new(BenchmarkKind::Ackley, 3).unwrap();
        assert_eq!(problem.dimension(), 3);
        assert_eq!(problem.bounds().lower(), &[-15.0; 3]);
        assert_eq!(problem.bounds().upper(), &[30.0; 3]);
        assert_eq!(problem.objfun(&[0.0; 3]).len(), 1);
    }

    #[test]
    fn test_rosenbrock_needs_two_dimensions() {
        assert!(matches!(
            BenchmarkProblem::new(BenchmarkKind::Rosenbrock, 1),
            Err(ProblemError::DimensionTooSmall { required: 2, .. })
        ));
        assert!(matches!(
            BenchmarkProblem::new(BenchmarkKind::Sphere, 0),
            Err(ProblemError::ZeroDimension)
        ));
    }
}
