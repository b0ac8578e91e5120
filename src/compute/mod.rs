//! Compute module - Problems, populations and the Firefly optimizer.

mod benchmark;
mod distance;
mod firefly;
mod population;
mod problem;

pub use benchmark::*;
pub use distance::*;
pub use firefly::*;
pub use population::*;
pub use problem::*;
