//! Population of candidate solutions bound to a problem.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::problem::{Problem, ProblemError};

/// A candidate solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// Current decision vector.
    pub cur_x: Vec<f64>,
    /// Fitness of `cur_x`.
    pub cur_f: Vec<f64>,
    /// Best decision vector visited by this individual.
    pub best_x: Vec<f64>,
    /// Fitness of `best_x`.
    pub best_f: Vec<f64>,
}

impl Individual {
    fn new(x: Vec<f64>, f: Vec<f64>) -> Self {
        Self {
            best_x: x.clone(),
            best_f: f.clone(),
            cur_x: x,
            cur_f: f,
        }
    }
}

/// Best individual ever recorded by a population.
#[derive(Debug, Clone, PartialEq)]
pub struct Champion {
    pub x: Vec<f64>,
    pub f: Vec<f64>,
}

/// Indexed access to a set of individuals, as seen by an algorithm.
///
/// Writes go through `set_position`, which re-evaluates the objective; the
/// algorithm never writes fitness directly.
pub trait Swarm {
    type Problem: Problem;

    fn problem(&self) -> &Self::Problem;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current decision vector of individual `index`.
    fn position(&self, index: usize) -> &[f64];

    /// Current fitness of individual `index`.
    fn fitness(&self, index: usize) -> &[f64];

    /// Move individual `index` to `x` and refresh its fitness.
    fn set_position(&mut self, index: usize, x: &[f64]);
}

/// Ordered set of individuals evaluated on a problem.
#[derive(Debug, Clone)]
pub struct Population<P> {
    problem: P,
    individuals: Vec<Individual>,
    champion: Option<Champion>,
}

impl<P: Problem> Population<P> {
    /// Create an empty population.
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            individuals: Vec::new(),
            champion: None,
        }
    }

    /// Create a population of `size` individuals sampled uniformly in the
    /// problem bounds. Integer coordinates are rounded.
    pub fn random<R: Rng + ?Sized>(problem: P, size: usize, rng: &mut R) -> Self {
        let mut population = Self::new(problem);
        let bounds = population.problem.bounds().clone();
        let continuous = population.problem.continuous_dimension();

        for _ in 0..size {
            let x: Vec<f64> = bounds
                .lower()
                .iter()
                .zip(bounds.upper())
                .enumerate()
                .map(|(k, (&lo, &hi))| {
                    let value = Uniform::new_inclusive(lo, hi).sample(rng);
                    if k < continuous {
                        value
                    } else {
                        value.round().clamp(lo, hi)
                    }
                })
                .collect();
            population.insert(x);
        }

        population
    }

    /// Append an individual at `x`, evaluating it.
    pub fn push(&mut self, x: Vec<f64>) -> Result<usize, ProblemError> {
        self.check_length(&x)?;
        Ok(self.insert(x))
    }

    /// Move individual `index` to `x`, evaluating it.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set_x(&mut self, index: usize, x: Vec<f64>) -> Result<(), ProblemError> {
        self.check_length(&x)?;
        self.update(index, x);
        Ok(())
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individual(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Best individual ever recorded, `None` while empty.
    pub fn champion(&self) -> Option<&Champion> {
        self.champion.as_ref()
    }

    /// Index of the currently best individual; the first one wins ties.
    pub fn best_index(&self) -> Option<usize> {
        let mut iter = self.individuals.iter().enumerate();
        let (mut best, mut best_f) = iter.next().map(|(i, ind)| (i, &ind.cur_f))?;
        for (i, ind) in iter {
            if self.problem.compare_fitness(&ind.cur_f, best_f) {
                best = i;
                best_f = &ind.cur_f;
            }
        }
        Some(best)
    }

    fn check_length(&self, x: &[f64]) -> Result<(), ProblemError> {
        let expected = self.problem.dimension();
        if x.len() != expected {
            return Err(ProblemError::PositionLengthMismatch {
                expected,
                found: x.len(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, x: Vec<f64>) -> usize {
        let f = self.problem.objfun(&x);
        self.update_champion(&x, &f);
        self.individuals.push(Individual::new(x, f));
        self.individuals.len() - 1
    }

    fn update(&mut self, index: usize, x: Vec<f64>) {
        let f = self.problem.objfun(&x);
        self.update_champion(&x, &f);

        let individual = &mut self.individuals[index];
        if self.problem.compare_fitness(&f, &individual.best_f) {
            individual.best_x.clone_from(&x);
            individual.best_f.clone_from(&f);
        }
        individual.cur_x = x;
        individual.cur_f = f;
    }

    fn update_champion(&mut self, x: &[f64], f: &[f64]) {
        let improved = match &self.champion {
            Some(champion) => self.problem.compare_fitness(f, &champion.f),
            None => true,
        };
        if improved {
            self.champion = Some(Champion {
                x: x.to_vec(),
                f: f.to_vec(),
            });
        }
    }
}

impl<P: Problem> Swarm for Population<P> {
    type Problem = P;

    fn problem(&self) -> &P {
        &self.problem
    }

    fn len(&self) -> usize {
        self.individuals.len()
    }

    fn position(&self, index: usize) -> &[f64] {
        &self.individuals[index].cur_x
    }

    fn fitness(&self, index: usize) -> &[f64] {
        &self.individuals[index].cur_f
    }

    fn set_position(&mut self, index: usize, x: &[f64]) {
        debug_assert_eq!(x.len(), self.problem.dimension());
        self.update(index, x.to_vec());
    }
}
