//! Yoshida fourth-order integration method
//!
//! Yoshida's composition trick: chain three velocity-Verlet-like kicks
//! with carefully chosen weights (one of them negative, stepping briefly
//! backward in time) so the dt³ error terms cancel. The result is a
//! fourth-order symplectic integrator costing three force evaluations
//! per step.

use super::{AccelerationField, Integrator};
use crate::physics::math::{Scalar, Vector};

/// Yoshida 4th-order symplectic integrator
///
/// # Algorithm
///
/// With `w0 = -cbrt(2)/(2 - cbrt(2))` and `w1 = 1/(2 - cbrt(2))`, the
/// coefficients are
///
/// ```text
/// c1 = c4 = w1/2      d1 = d3 = w1
/// c2 = c3 = (w0+w1)/2 d2 = w0
/// ```
///
/// and one step interleaves four drifts with three kicks:
///
/// ```text
/// x <- x + c1*dt*v
/// v <- v + d1*dt*f(x)
/// x <- x + c2*dt*v
/// v <- v + d2*dt*f(x)
/// x <- x + c3*dt*v
/// v <- v + d3*dt*f(x)
/// x <- x + c4*dt*v
/// ```
///
/// # Properties
///
/// - **Order**: O(dt⁴) local truncation error
/// - **Force evaluations**: 3 per step
/// - **Symplectic**: yes; each stage is a shear with unit Jacobian
/// - **Time-reversible**: yes (palindromic coefficients)
/// - **Energy behavior**: bounded oscillation, suitable for millions of
///   steps (the circular-orbit tests run 2.5 million)
///
/// # Reference
///
/// Yoshida (1990), "Construction of higher order symplectic integrators",
/// Physics Letters A 150(5-7), 262-268.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yoshida4;

const CBRT2: f64 = 1.259_921_049_894_873_2;
const W0: f64 = -CBRT2 / (2.0 - CBRT2);
const W1: f64 = 1.0 / (2.0 - CBRT2);

const C1: Scalar = (W1 / 2.0) as Scalar;
const C2: Scalar = ((W0 + W1) / 2.0) as Scalar;
const D1: Scalar = W1 as Scalar;
const D2: Scalar = W0 as Scalar;

impl Integrator for Yoshida4 {
    fn step(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        field: &dyn AccelerationField,
        dt: Scalar,
    ) {
        // c3 = c2, c4 = c1, d3 = d1.
        *position += *velocity * (C1 * dt);
        *velocity += field.at(*position) * (D1 * dt);
        *position += *velocity * (C2 * dt);
        *velocity += field.at(*position) * (D2 * dt);
        *position += *velocity * (C2 * dt);
        *velocity += field.at(*position) * (D1 * dt);
        *position += *velocity * (C1 * dt);
    }

    fn name(&self) -> &'static str {
        "yoshida4"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["yoshida", "y4"]
    }

    fn convergence_order(&self) -> usize {
        4
    }

    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }
}
