//! Problem abstraction consumed by optimization algorithms.
//!
//! A problem describes a box-constrained search space and an objective.
//! Decision vectors are laid out as a continuous prefix followed by an
//! optional integer tail of `integer_dimension()` coordinates.

/// Lower/upper bounds of a box-constrained search space.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Create bounds from explicit vectors.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, ProblemError> {
        if lower.len() != upper.len() {
            return Err(ProblemError::BoundsLengthMismatch {
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(ProblemError::ZeroDimension);
        }
        for (index, (&lo, &hi)) in lower.iter().zip(&upper).enumerate() {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(ProblemError::InvalidBound {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
            if !(hi - lo).is_finite() {
                return Err(ProblemError::UnboundedWidth {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Same interval on every coordinate.
    pub fn uniform(dimension: usize, lower: f64, upper: f64) -> Result<Self, ProblemError> {
        Self::new(vec![lower; dimension], vec![upper; dimension])
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    #[inline]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    #[inline]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Check whether `x` has the right length and lies inside the box.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.dimension()
            && x
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(v, (lo, hi))| *lo <= *v && *v <= *hi)
    }
}

/// Optimization problem seen through the capabilities an algorithm needs.
///
/// Only `bounds` and `objfun` are required. The defaults describe a
/// continuous, single-objective, unconstrained, minimizing problem.
pub trait Problem {
    /// Box bounds. Their length is the total dimension.
    fn bounds(&self) -> &Bounds;

    /// Evaluate the objective(s) at `x`.
    fn objfun(&self, x: &[f64]) -> Vec<f64>;

    /// Total number of decision variables.
    fn dimension(&self) -> usize {
        self.bounds().dimension()
    }

    /// Number of trailing integer variables.
    fn integer_dimension(&self) -> usize {
        0
    }

    /// Number of leading continuous variables.
    fn continuous_dimension(&self) -> usize {
        self.dimension().saturating_sub(self.integer_dimension())
    }

    /// Length of the fitness vector returned by `objfun`.
    fn objective_dimension(&self) -> usize {
        1
    }

    /// Number of explicit (non-box) constraints.
    fn constraint_dimension(&self) -> usize {
        0
    }

    /// Returns true when `f1` is strictly better than `f2`.
    fn compare_fitness(&self, f1: &[f64], f2: &[f64]) -> bool {
        f1[0] < f2[0]
    }
}

/// Problem and population construction errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProblemError {
    #[error("Problem dimension must be non-zero")]
    ZeroDimension,
    #[error("Lower bounds have length {lower} but upper bounds have length {upper}")]
    BoundsLengthMismatch { lower: usize, upper: usize },
    #[error("Invalid bound at coordinate {index}: [{lower}, {upper}]")]
    InvalidBound {
        index: usize,
        lower: f64,
        upper: f64,
    },
    #[error("Bound width at coordinate {index} is not finite: [{lower}, {upper}]")]
    UnboundedWidth {
        index: usize,
        lower: f64,
        upper: f64,
    },
    #[error("{name} requires at least {required} dimensions, got {dimension}")]
    DimensionTooSmall {
        name: &'static str,
        required: usize,
        dimension: usize,
    },
    #[error("Decision vector has length {found}, expected {expected}")]
    PositionLengthMismatch { expected: usize, found: usize },
}
