//! Firefly swarm optimization for box-constrained continuous problems.
//!
//! This crate provides the Firefly metaheuristic together with the small
//! framework it plugs into: a problem abstraction, a population of
//! individuals and a few classic benchmark functions.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types (algorithm parameters, experiments)
//! - `compute`: Numerical computation (problems, population, optimizer)
//!
//! # Example
//!
//! ```rust
//! use firefly_swarm::{
//!     compute::{Algorithm, BenchmarkProblem, Firefly, Population},
//!     schema::{BenchmarkKind, FireflyConfig},
//! };
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! // Problem and initial population
//! let problem = BenchmarkProblem::new(BenchmarkKind::Rastrigin, 5).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut population = Population::random(problem, 20, &mut rng);
//!
//! // Create the optimizer and evolve in place
//! let config = FireflyConfig {
//!     generations: 100,
//!     ..Default::default()
//! };
//! let mut firefly = Firefly::from_config(config).unwrap().with_seed(7);
//! firefly.evolve(&mut population).unwrap();
//!
//! println!("Best fitness: {:?}", population.champion().unwrap().f);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Algorithm, BenchmarkProblem, Firefly, Population, Problem, Swarm};
pub use schema::{BenchmarkKind, ExperimentConfig, FireflyConfig};
