//! Prelude module
//!
//! Re-exports the most commonly used types and traits to reduce import
//! boilerplate in binaries, tests, and benches.

pub use crate::config::{ScenarioConfig, SimulationConfig};
pub use crate::physics::barnes_hut::{sort_morton, BarnesHutTree, DiskSummary};
pub use crate::physics::disk::Disk;
pub use crate::physics::gravity::Gravity;
pub use crate::physics::integrators::registry::IntegratorRegistry;
pub use crate::physics::integrators::{AccelerationField, Integrator, VelocityVerlet, Yoshida4};
pub use crate::physics::kahan::Kahan;
pub use crate::physics::math::{Scalar, Vector};
pub use crate::physics::particle::Particle;
pub use crate::physics::simulation::Simulation;
pub use crate::scenarios;
