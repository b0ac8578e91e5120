//! Schema module - Configuration types for Firefly runs and experiments.

mod config;
mod experiment;

pub use config::*;
pub use experiment::*;
