//! Command line interface

use clap::Parser;
use std::fmt;

use crate::config::{clamp_particles_limit, SimulationConfig};
use crate::physics::integrators::registry::IntegratorRegistry;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Invalid integrator name provided
    InvalidIntegrator(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "failed to load configuration: {msg}"),
            CliError::InvalidIntegrator(msg) => write!(f, "invalid integrator: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// dustdrift - 2D Barnes-Hut gravity sandbox
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Number of particles to simulate (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub bodies: Option<usize>,

    /// Gravitational constant (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE")]
    pub gravity: Option<f32>,

    /// Integrator type (e.g. yoshida4, velocity_verlet)
    #[arg(short = 'i', long, value_name = "TYPE")]
    pub integrator: Option<String>,

    /// Random seed for scenario generation
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of steps to simulate before exiting
    #[arg(long, value_name = "COUNT", default_value = "1000")]
    pub steps: u64,

    /// Use the galaxies scenario instead of the figure-8 demo
    #[arg(long)]
    pub galaxies: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available integrators and exit
    #[arg(long)]
    pub list_integrators: bool,
}

/// Handles the --list-integrators flag by printing available integrators.
pub fn handle_list_integrators() {
    let registry = IntegratorRegistry::default();
    println!("Available integrators:");
    for name in registry.list_available() {
        println!("  - {name}");
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        println!("\nAliases:");
        for (alias, target) in aliases {
            println!("  - {alias} -> {target}");
        }
    }
}

/// Loads configuration from file or defaults, applies the environment,
/// then applies command-line overrides.
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::default()
    };

    config.apply_env();

    if let Some(bodies) = args.bodies {
        let bodies = clamp_particles_limit(bodies);
        println!("Overriding particle count to: {bodies}");
        config.scenario.particles_limit = bodies;
    }

    if let Some(gravity) = args.gravity {
        println!("Overriding gravitational constant to: {gravity}");
        config.physics.gravitational_constant = gravity;
    }

    if let Some(integrator) = &args.integrator {
        let registry = IntegratorRegistry::default();
        registry
            .create(integrator)
            .map_err(CliError::InvalidIntegrator)?;
        println!("Using integrator: {integrator}");
        config.physics.integrator = integrator.clone();
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.physics.initial_seed = Some(seed);
    }

    if args.galaxies {
        config.scenario.galaxies = true;
    }

    Ok(config)
}
