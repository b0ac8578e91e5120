//! Firefly algorithm for box-constrained, single-objective continuous problems.
//!
//! Each firefly is pulled toward every brighter (strictly better) firefly
//! with an attractiveness that decays with distance, plus a uniform random
//! step. Moves are applied eagerly: pairs are visited in a fixed order
//! (`i` outer, `j` inner, both ascending) and every move is written back to
//! the swarm and re-evaluated before the next pair is considered, so later
//! pairs see already-updated positions.
//!
//! The absorption coefficient is normalized once per call by the largest
//! pairwise distance in the swarm. When every firefly sits on the same
//! point that distance is zero and the normalized coefficient is taken as
//! zero, i.e. attraction is undamped.
//!
//! # Example
//!
//! ```rust
//! use firefly_swarm::compute::{Algorithm, BenchmarkProblem, Firefly, Population};
//! use firefly_swarm::schema::BenchmarkKind;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let problem = BenchmarkProblem::new(BenchmarkKind::Sphere, 3).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut population = Population::random(problem, 15, &mut rng);
//!
//! let mut firefly = Firefly::new(50, 0.01, 1.0, 0.01).unwrap().with_seed(42);
//! firefly.evolve(&mut population).unwrap();
//!
//! println!("{}", firefly);
//! println!("champion: {:?}", population.champion().unwrap().f);
//! ```

use std::fmt;

use log::{debug, info, trace, warn};
use rand::prelude::*;

use crate::schema::{ConfigError, FireflyConfig};

use super::distance::{attractiveness, max_pairwise_distance, squared_distance};
use super::population::Swarm;
use super::problem::Problem;

/// An optimization algorithm that evolves a swarm in place.
pub trait Algorithm {
    /// Short human-readable name.
    fn name(&self) -> &'static str;

    /// Parameter dump.
    fn describe(&self) -> String;

    /// Evolve `swarm` in place.
    fn evolve<S: Swarm>(&mut self, swarm: &mut S) -> Result<(), EvolveError>;
}

/// Reasons a swarm cannot be evolved. The swarm is untouched on error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvolveError {
    #[error("There is no continuous part in the problem decision vector for Firefly to optimise")]
    NoContinuousPart,
    #[error("The problem has {0} objectives, Firefly only handles single-objective problems")]
    NotSingleObjective(usize),
    #[error("The problem has {0} constraints, Firefly only handles box-constrained problems")]
    NotBoxConstrained(usize),
    #[error("Firefly needs at least 2 individuals in the population, got {0}")]
    PopulationTooSmall(usize),
}

/// Snapshot reported after each generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationProgress {
    /// Zero-based generation index.
    pub generation: usize,
    /// Generations performed by this call.
    pub total_generations: usize,
    /// Best individual at the start of the generation.
    pub best_index: usize,
    /// Its fitness.
    pub best_fitness: Vec<f64>,
    /// Number of moves applied during the generation.
    pub moves: usize,
}

/// The Firefly optimizer.
///
/// The random generator is part of the instance and keeps its state across
/// calls to `evolve`. Cloning copies that state, so a clone draws the same
/// numbers as the original from the point of cloning.
#[derive(Debug, Clone)]
pub struct Firefly {
    config: FireflyConfig,
    rng: StdRng,
}

impl Firefly {
    /// Create an optimizer from raw parameters.
    ///
    /// `generations` must be non-negative, `alpha`, `beta` and `gamma` must
    /// lie in `[0, 1]`.
    pub fn new(generations: i64, alpha: f64, beta: f64, gamma: f64) -> Result<Self, ConfigError> {
        Self::from_config(FireflyConfig {
            generations,
            alpha,
            beta,
            gamma,
        })
    }

    /// Create an optimizer from a configuration, seeded from entropy.
    pub fn from_config(config: FireflyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(rand::random()),
        })
    }

    /// Use a fixed seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    /// Restart the random stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Validated parameters of this optimizer.
    pub fn config(&self) -> &FireflyConfig {
        &self.config
    }

    /// Evolve using the instance generator, reporting each generation.
    pub fn evolve_with_callback<S, F>(&mut self, swarm: &mut S, callback: F) -> Result<(), EvolveError>
    where
        S: Swarm,
        F: FnMut(&GenerationProgress),
    {
        run(&self.config, swarm, &mut self.rng, callback)
    }

    /// Evolve drawing random numbers from `rng` instead of the instance
    /// generator, which is left untouched.
    pub fn evolve_with_rng<S, R>(&self, swarm: &mut S, rng: &mut R) -> Result<(), EvolveError>
    where
        S: Swarm,
        R: Rng + ?Sized,
    {
        run(&self.config, swarm, rng, |_| {})
    }
}

impl Algorithm for Firefly {
    fn name(&self) -> &'static str {
        "Firefly optimization"
    }

    fn describe(&self) -> String {
        format!(
            "iter:{} alpha:{} beta:{} gamma:{} ",
            self.config.generations, self.config.alpha, self.config.beta, self.config.gamma
        )
    }

    fn evolve<S: Swarm>(&mut self, swarm: &mut S) -> Result<(), EvolveError> {
        self.evolve_with_callback(swarm, |_| {})
    }
}

impl fmt::Display for Firefly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm name: {}", self.name())?;
        write!(f, "\tParameters: {}", self.describe())
    }
}

/// Check that the swarm and its problem are suitable for Firefly.
pub fn check_applicability<S: Swarm>(swarm: &S) -> Result<(), EvolveError> {
    let problem = swarm.problem();

    if problem.continuous_dimension() == 0 {
        return Err(EvolveError::NoContinuousPart);
    }
    if problem.objective_dimension() != 1 {
        return Err(EvolveError::NotSingleObjective(problem.objective_dimension()));
    }
    if problem.constraint_dimension() != 0 {
        return Err(EvolveError::NotBoxConstrained(problem.constraint_dimension()));
    }
    if swarm.len() < 2 {
        return Err(EvolveError::PopulationTooSmall(swarm.len()));
    }
    Ok(())
}

fn run<S, R, F>(
    config: &FireflyConfig,
    swarm: &mut S,
    rng: &mut R,
    mut callback: F,
) -> Result<(), EvolveError>
where
    S: Swarm,
    R: Rng + ?Sized,
    F: FnMut(&GenerationProgress),
{
    check_applicability(swarm)?;

    if config.generations == 0 {
        return Ok(());
    }
    let generations = config.generations as usize;

    let continuous = swarm.problem().continuous_dimension();
    let bounds = swarm.problem().bounds().clone();
    let (lb, ub) = (bounds.lower(), bounds.upper());
    let np = swarm.len();

    // Working copy, kept in sync with every write to the swarm.
    let mut x: Vec<Vec<f64>> = (0..np).map(|i| swarm.position(i).to_vec()).collect();
    let mut fit: Vec<Vec<f64>> = (0..np).map(|i| swarm.fitness(i).to_vec()).collect();

    let r_max = max_pairwise_distance(&x, continuous);
    let gamma_eff = if r_max > 0.0 {
        config.gamma / r_max
    } else {
        warn!("All fireflies coincide, attraction is not damped by distance");
        0.0
    };

    info!(
        "Firefly: {} generations, {} fireflies, {} continuous dimensions, r_max = {:.6}",
        generations, np, continuous, r_max
    );

    for generation in 0..generations {
        let best = best_index(swarm.problem(), &fit);
        let best_fitness = fit[best].clone();
        let mut moves = 0;

        for i in 0..np {
            for j in 0..np {
                if !swarm.problem().compare_fitness(&fit[j], &fit[i]) {
                    continue;
                }

                let r_sqrd = squared_distance(&x[i], &x[j], continuous);
                let b = attractiveness(r_sqrd, gamma_eff, config.beta);

                for k in 0..continuous {
                    let step = perturbation(config.alpha * lb[k], config.alpha * ub[k], rng);
                    let moved = (1.0 - b) * x[i][k] + b * x[j][k] + step;
                    x[i][k] = moved.clamp(lb[k], ub[k]);
                }

                swarm.set_position(i, &x[i]);
                fit[i].clear();
                fit[i].extend_from_slice(swarm.fitness(i));
                moves += 1;

                trace!("firefly {} moved toward {} (b = {:.6})", i, j, b);
            }
        }

        debug!(
            "generation {}/{}: best firefly {} {:?}, {} moves",
            generation + 1,
            generations,
            best,
            best_fitness,
            moves
        );

        callback(&GenerationProgress {
            generation,
            total_generations: generations,
            best_index: best,
            best_fitness,
            moves,
        });
    }

    Ok(())
}

/// Linear scan; a later individual with equal fitness does not replace an
/// earlier best.
fn best_index<P: Problem + ?Sized>(problem: &P, fit: &[Vec<f64>]) -> usize {
    let mut best = 0;
    for i in 1..fit.len() {
        if problem.compare_fitness(&fit[i], &fit[best]) {
            best = i;
        }
    }
    best
}

/// Uniform draw over `[lo, hi)`. The interval is used as given, it is not
/// centered on zero.
#[inline]
fn perturbation<R: Rng + ?Sized>(lo: f64, hi: f64, rng: &mut R) -> f64 {
    lo + (hi - lo) * rng.r#gen::<f64>()
}
