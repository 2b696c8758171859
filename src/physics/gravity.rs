//! Pairwise gravity between uniform disks
//!
//! Far apart, two disks attract like point masses. One engulfing the
//! other feels nothing (shell theorem). In between - partial overlap -
//! there is no usable closed form, so the test disk is chopped into a
//! fixed set of quasi-random sample points and the contributions of the
//! samples outside the source disk are averaged; samples inside it cancel
//! by the shell theorem and are discarded. The result is smooth across
//! overlap depths at the cost of a stochastic bias that [`Gravity::refresh`]
//! launders away between frames.

use crate::physics::disk::Disk;
use crate::physics::halton::Halton;
use crate::physics::math::{Scalar, Vector};

/// Number of Monte-Carlo samples when not specified.
const DEFAULT_SAMPLES: usize = 30;

/// Halton warm-up: skip the strongly correlated opening terms.
const BURN_IN: u32 = 1_234;

/// Gravity evaluator. Stateless aside from the pre-sampled unit disk.
#[derive(Debug, Clone)]
pub struct Gravity {
    /// Quasi-random points on the unit disk, sorted by x coordinate.
    samples: Vec<Vector>,
    h2: Halton,
    h3: Halton,
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES)
    }
}

impl Gravity {
    /// An evaluator with `sample_count` Monte-Carlo points.
    pub fn new(sample_count: usize) -> Self {
        let mut gravity = Self {
            samples: vec![Vector::ZERO; sample_count],
            h2: Halton::new(2),
            h3: Halton::new(3),
        };
        for _ in 0..BURN_IN {
            gravity.h2.next();
            gravity.h3.next();
        }
        gravity.refresh();
        gravity
    }

    /// Re-populate the sample disk.
    ///
    /// The samples are fixed between calls, which biases overlap forces in
    /// a way that is correlated across particles; calling this once per
    /// frame removes the long-term bias. Rejection sampling against the
    /// Halton-filled unit square keeps the points evenly spread, and the
    /// sort by x gives the overlap loop's branch predictor a monotone
    /// sequence to chew on.
    pub fn refresh(&mut self) {
        for point in &mut self.samples {
            *point = loop {
                let candidate =
                    2.0 * Vector::new(self.h2.next(), self.h3.next()) - Vector::ONE;
                if candidate.length_squared() < 1.0 {
                    break candidate;
                }
            };
        }
        self.samples.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    /// Acceleration-proportional field on the test disk `c0` due to a
    /// source disk `c1` of mass `m1` (the caller folds in the
    /// gravitational constant). `distance` may carry a precomputed
    /// `|c1.center - c0.center|`.
    pub fn field(&self, c0: Disk, c1: Disk, m1: Scalar, distance: Option<Scalar>) -> Vector {
        let offset = c1.center - c0.center;
        let r = distance.unwrap_or_else(|| offset.length());

        if r >= c0.radius + c1.radius {
            // Disjoint: point masses. 1/r and three multiplies instead of
            // a pow call.
            let t = 1.0 / r;
            t * t * t * m1 * offset
        } else if r <= (c1.radius - c0.radius).abs() {
            // One disk engulfs the other: zero net force inside a
            // radially symmetric mass.
            Vector::ZERO
        } else {
            self.overlapping(c0.radius, offset, c1.radius, m1)
        }
    }

    /// Monte-Carlo quadrature over the test disk for the partial-overlap
    /// regime. `source` is the source center relative to the test center.
    fn overlapping(&self, r0: Scalar, source: Vector, r1: Scalar, m1: Scalar) -> Vector {
        let mut sum = Vector::ZERO;
        for &p in &self.samples {
            let q = source - r0 * p;
            let r = q.length();
            if r > r1 {
                let s = 1.0 / r;
                sum += s * s * s * q;
            }
        }
        (1.0 / self.samples.len() as Scalar) * m1 * sum
    }

    /// Number of Monte-Carlo samples.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}
