//! Layered configuration
//!
//! Defaults, then an optional TOML file, then environment variables, then
//! command-line overrides (applied in `cli`). The file format carries a
//! version field; files older than the current version are ignored rather
//! than half-applied.

use crate::physics::math::Scalar;
use crate::physics::simulation::DEFAULT_TAN_ANGLE_THRESHOLD;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable selecting the galaxies scenario when set.
pub const ENV_GALAXIES: &str = "GRASS_GALAXIES";

/// Environment variable capping the particle count.
pub const ENV_PARTICLES_LIMIT: &str = "GRASS_PARTICLES_LIMIT";

/// Particle-count bounds applied to every external override.
pub const PARTICLES_LIMIT_RANGE: std::ops::RangeInclusive<usize> = 1..=10_000;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SimulationConfig {
    pub version: u32,
    pub physics: PhysicsConfig,
    pub scenario: ScenarioConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            version: 1,
            physics: PhysicsConfig::default(),
            scenario: ScenarioConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PhysicsConfig {
    pub gravitational_constant: Scalar,
    pub tan_angle_threshold: Scalar,
    pub monte_carlo_samples: usize,
    pub integrator: String,
    pub time_step: Scalar,
    pub initial_seed: Option<u64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 0.015_625,
            tan_angle_threshold: DEFAULT_TAN_ANGLE_THRESHOLD,
            monte_carlo_samples: 30,
            integrator: "yoshida4".to_string(),
            time_step: 1.0 / 90.0,
            initial_seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScenarioConfig {
    /// Galaxies field instead of the figure-8 demo.
    pub galaxies: bool,
    pub particles_limit: usize,
    /// Particles farther than this from the origin are culled.
    pub cull_radius: Scalar,
    /// Log-normal mass and radius parameters for randomized particles.
    pub log_mean_mass: Scalar,
    pub log_stdev_mass: Scalar,
    pub log_mean_radius: Scalar,
    pub log_stdev_radius: Scalar,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            galaxies: false,
            particles_limit: 2_500,
            cull_radius: 5_000.0,
            log_mean_mass: 0.0,
            log_stdev_mass: 0.0,
            // ln(0.05) and ln(1.25)
            log_mean_radius: -2.995_732_3,
            log_stdev_radius: 0.223_143_55,
        }
    }
}

impl SimulationConfig {
    /// Load from a TOML file, falling back to defaults on any problem.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(config) => {
                    if config.version < Self::default().version {
                        warn!(
                            "config file {} has outdated version {}; using defaults",
                            path, config.version
                        );
                        Self::default()
                    } else {
                        config
                    }
                }
                Err(e) => {
                    warn!("failed to parse config file {}: {}; using defaults", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                warn!("config file {} not found; using defaults", path);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply the recognized environment variables.
    pub fn apply_env(&mut self) {
        if std::env::var_os(ENV_GALAXIES).is_some() {
            self.scenario.galaxies = true;
        }
        if let Some(value) = std::env::var_os(ENV_PARTICLES_LIMIT) {
            match value.to_string_lossy().parse::<usize>() {
                Ok(limit) => self.scenario.particles_limit = clamp_particles_limit(limit),
                Err(_) => warn!(
                    "ignoring unparsable {}={:?}",
                    ENV_PARTICLES_LIMIT, value
                ),
            }
        }
    }
}

/// Clamp an externally supplied particle count to the supported range.
pub fn clamp_particles_limit(limit: usize) -> usize {
    limit.clamp(*PARTICLES_LIMIT_RANGE.start(), *PARTICLES_LIMIT_RANGE.end())
}
