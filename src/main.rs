use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use dustdrift::cli::{self, Args, CliError};
use dustdrift::config::SimulationConfig;
use dustdrift::physics::gravity::Gravity;
use dustdrift::physics::integrators::registry::IntegratorRegistry;
use dustdrift::physics::simulation::Simulation;
use dustdrift::scenarios;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if args.list_integrators {
        cli::handle_list_integrators();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = cli::load_and_apply_config(args)?;

    let registry = IntegratorRegistry::default();
    let integrator = registry
        .create(&config.physics.integrator)
        .map_err(CliError::InvalidIntegrator)?;

    let mut rng = match config.physics.initial_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    let mut sim =
        Simulation::new(integrator).with_gravity(Gravity::new(config.physics.monte_carlo_samples));
    sim.tan_angle_threshold = config.physics.tan_angle_threshold;
    reset(&mut sim, &config, &mut rng);
    info!(
        particles = sim.len(),
        integrator = %config.physics.integrator,
        galaxies = config.scenario.galaxies,
        "simulation initialized"
    );

    let dt = config.physics.time_step;
    let cull = config.scenario.cull_radius;
    for step in 0..args.steps {
        // Particles that drifted too far are gone for good.
        sim.remove_if(|p| p.position.length_squared() > cull * cull);

        sim.step(dt);
        sim.refresh_disk();

        if !sim.healthy() {
            warn!(step, "non-finite particle state; resetting the table");
            reset(&mut sim, &config, &mut rng);
        }

        if (step + 1) % 90 == 0 {
            debug!(
                step = step + 1,
                particles = sim.len(),
                t = (step + 1) as f32 * dt,
                "progress"
            );
        }
    }

    info!(
        steps = args.steps,
        particles = sim.len(),
        t = args.steps as f32 * dt,
        "simulation finished"
    );
    Ok(())
}

/// (Re)populate the table from the configured scenario.
fn reset(sim: &mut Simulation, config: &SimulationConfig, rng: &mut ChaCha8Rng) {
    if config.scenario.galaxies {
        sim.set_particles(scenarios::galaxies(&config.scenario, rng));
        sim.g = config.physics.gravitational_constant;
    } else {
        sim.set_particles(scenarios::figure_eight());
        // The figure-8 choreography only closes with unit G.
        sim.g = 1.0;
    }
}
