//! Firefly swarm CLI - Run an optimization experiment from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;
use std::time::Instant;

use rand::prelude::*;

use firefly_swarm::{
    compute::{Algorithm, BenchmarkProblem, Bounds, Firefly, Population, Problem, ProblemError},
    schema::{ExperimentConfig, ProblemConfig},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <experiment.json>", args[0]);
        eprintln!();
        eprintln!("Run the Firefly optimizer on a benchmark problem.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  experiment.json  Path to experiment configuration file");
        eprintln!();
        eprintln!("An example configuration is printed with the --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);

    let config = ExperimentConfig::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading experiment: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid experiment: {}", e);
        std::process::exit(1);
    }

    let problem = build_problem(&config.problem).unwrap_or_else(|e| {
        eprintln!("Error creating problem: {}", e);
        std::process::exit(1);
    });

    let seed = config.random_seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut firefly = Firefly::from_config(config.algorithm)
        .unwrap_or_else(|e| {
            eprintln!("Invalid algorithm parameters: {}", e);
            std::process::exit(1);
        })
        .with_seed(rng.r#gen());

    let bounds = problem.bounds().clone();
    let mut population = Population::random(problem, config.population_size, &mut rng);

    println!("Firefly Swarm");
    println!("=============");
    println!(
        "Problem: {} ({} dimensions, box [{:.3}, {:.3}])",
        config.problem.benchmark.name(),
        config.problem.dimension,
        bounds.lower()[0],
        bounds.upper()[0]
    );
    println!("Population: {}", population.len());
    println!("{}", firefly);
    println!("Evolutions: {}", config.evolutions);
    println!("Seed: {}", seed);
    println!();

    print_champion("Initial", &population);

    let start = Instant::now();

    for i in 0..config.evolutions {
        if let Err(e) = firefly.evolve(&mut population) {
            eprintln!("Evolution failed: {}", e);
            std::process::exit(1);
        }
        print_champion(&format!("Evolution {}/{}", i + 1, config.evolutions), &population);
    }

    let elapsed = start.elapsed();

    println!();
    println!("Final state:");
    if let Some(champion) = population.champion() {
        println!("  Champion fitness: {:.6e}", champion.f[0]);
        println!("  Champion x: {:?}", champion.x);
    }
    println!("Time: {:.3}s", elapsed.as_secs_f32());
}

fn build_problem(config: &ProblemConfig) -> Result<BenchmarkProblem, ProblemError> {
    match config.bounds {
        Some((lower, upper)) => BenchmarkProblem::with_bounds(
            config.benchmark,
            Bounds::uniform(config.dimension, lower, upper)?,
        ),
        None => BenchmarkProblem::new(config.benchmark, config.dimension),
    }
}

fn print_champion(label: &str, population: &Population<BenchmarkProblem>) {
    let best = population.best_index().map(|i| population.individual(i).cur_f[0]);
    let champion = population.champion().map(|c| c.f[0]);
    if let (Some(best), Some(champion)) = (best, champion) {
        println!(
            "  {}: current best={:.6e}, champion={:.6e}",
            label, best, champion
        );
    }
}

fn print_example_config() {
    let config = ExperimentConfig::default();

    println!("Example configuration (experiment.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing example: {}", e),
    }
}
