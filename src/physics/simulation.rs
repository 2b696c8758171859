//! Simulation table
//!
//! Owns the particle array and drives one fixed-step update: refresh and
//! sort Morton keys, snapshot the pre-step state, build the Barnes-Hut
//! tree over the snapshot, then integrate every particle against the
//! frozen tree. Forces on particle `i` are always computed from the other
//! particles' pre-step positions; mixing mid-step positions would break
//! the pairwise symmetry that energy conservation rests on.

use crate::physics::barnes_hut::{sort_morton, BarnesHutTree};
use crate::physics::disk::Disk;
use crate::physics::gravity::Gravity;
use crate::physics::integrators::{AccelerationField, Integrator, VelocityVerlet};
use crate::physics::kahan::Kahan;
use crate::physics::math::{Scalar, Vector};
use crate::physics::particle::Particle;

/// Default opening-angle criterion: tan(7 degrees).
pub const DEFAULT_TAN_ANGLE_THRESHOLD: Scalar = 0.122_784_56;

/// The simulation table: particle storage plus the per-step machinery.
///
/// Not thread-safe; `step` is synchronous and returns only when every
/// particle has been advanced.
pub struct Simulation {
    particles: Vec<Particle>,
    gravity: Gravity,
    integrator: Box<dyn Integrator>,
    /// Universal gravitational constant. Mutate freely between steps.
    pub g: Scalar,
    /// View-angle threshold for accepting a summary as a point mass.
    /// Larger values prune harder and cost accuracy.
    pub tan_angle_threshold: Scalar,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Box::new(VelocityVerlet))
    }
}

impl Simulation {
    pub fn new(integrator: Box<dyn Integrator>) -> Self {
        Self {
            particles: Vec::new(),
            gravity: Gravity::default(),
            integrator,
            g: 1.0,
            tan_angle_threshold: DEFAULT_TAN_ANGLE_THRESHOLD,
        }
    }

    /// Replace the gravity evaluator (e.g. for a different Monte-Carlo
    /// sample count).
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Remove every particle matching the predicate.
    pub fn remove_if<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&Particle) -> bool,
    {
        self.particles.retain(|p| !predicate(p));
    }

    /// Replace the whole particle set (scenario reset).
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles are value types; callers may mutate them between steps.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Advance the whole table by one step of size `dt`.
    pub fn step(&mut self, dt: Scalar) {
        if self.particles.is_empty() {
            return;
        }

        sort_morton(&mut self.particles);

        // Pre-step snapshot: every force this step sees these positions.
        let snapshot = self.particles.clone();
        let tree = BarnesHutTree::build(&snapshot);

        for (i, p) in snapshot.iter().enumerate() {
            let field = TreeField {
                tree: &tree,
                gravity: &self.gravity,
                test_radius: p.radius,
                g: self.g,
                tan_angle_threshold: self.tan_angle_threshold,
            };
            let mut position = p.position;
            let mut velocity = p.velocity;
            self.integrator.step(&mut position, &mut velocity, &field, dt);
            let live = &mut self.particles[i];
            live.position = position;
            live.velocity = velocity;
        }
    }

    /// Re-randomize the Monte-Carlo disk. Cheap; once per frame removes
    /// the correlated bias of a fixed sample set.
    pub fn refresh_disk(&mut self) {
        self.gravity.refresh();
    }

    /// Whether every particle still has finite position and velocity.
    /// `false` means the integration degenerated and the caller should
    /// reset the table.
    pub fn healthy(&self) -> bool {
        self.particles
            .iter()
            .all(|p| p.position.is_finite() && p.velocity.is_finite())
    }
}

/// Acceleration field backed by a depth-first query of the frozen tree.
struct TreeField<'a> {
    tree: &'a BarnesHutTree,
    gravity: &'a Gravity,
    test_radius: Scalar,
    g: Scalar,
    tan_angle_threshold: Scalar,
}

impl AccelerationField for TreeField<'_> {
    fn at(&self, position: Vector) -> Vector {
        let mut accel = Kahan::<Vector>::new();
        self.tree.depth_first(|summary| {
            // A summary centered exactly on the query point is the query
            // particle itself (or a stack of coincident particles, which
            // contribute nothing either way): skip without descending.
            if summary.center == position {
                return false;
            }
            let dist = summary.center.distance(position);
            if dist < summary.radius {
                // Inside the summary disk: the group cannot be treated as
                // a point from in here.
                return true;
            }
            if summary.radius / dist > self.tan_angle_threshold {
                // Subtends too wide an angle; open the group. The ratio
                // under-approximates the true subtended half-angle, which
                // errs toward descending.
                return true;
            }
            accel += self.gravity.field(
                Disk::new(position, self.test_radius),
                summary.disk(),
                self.g * summary.mass,
                Some(dist),
            );
            false
        });
        accel.total()
    }
}
