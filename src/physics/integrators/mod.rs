//! Time integrators
//!
//! Both integrators here are symplectic: they preserve the phase-space
//! area of Hamiltonian flow, which is what keeps orbital energy bounded
//! over millions of steps instead of drifting secularly. Neither supports
//! a variable step size; callers must advance with a fixed `dt`.

use crate::physics::math::{Scalar, Vector};

pub mod registry;
pub mod velocity_verlet;
pub mod yoshida4;

pub use velocity_verlet::VelocityVerlet;
pub use yoshida4::Yoshida4;

/// An acceleration as a function of candidate position.
///
/// Multi-stage integrators evaluate the field at perturbed positions
/// partway through a step; implementors must therefore answer for
/// arbitrary positions, not just the particle's current one.
pub trait AccelerationField {
    fn at(&self, position: Vector) -> Vector;
}

/// A fixed-step integrator advancing a `(position, velocity)` pair.
///
/// Implementations are stateless strategy objects; all per-particle state
/// lives in the arguments.
pub trait Integrator: Send + Sync + std::fmt::Debug {
    /// Advance one step of size `dt`, evaluating `field` as needed.
    fn step(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        field: &dyn AccelerationField,
        dt: Scalar,
    );

    /// Canonical name used by the registry and configuration.
    fn name(&self) -> &'static str;

    /// Alternative lookup names.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Theoretical order of convergence.
    fn convergence_order(&self) -> usize;

    fn clone_box(&self) -> Box<dyn Integrator>;
}

impl<F> AccelerationField for F
where
    F: Fn(Vector) -> Vector,
{
    fn at(&self, position: Vector) -> Vector {
        self(position)
    }
}
