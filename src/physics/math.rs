/// Scalar type for particle state (single precision; summaries accumulate
/// in double precision where dynamic range demands it)
pub type Scalar = f32;

/// 2D vector type for positions, velocities, and accelerations
pub type Vector = glam::Vec2;

/// Double-precision 2D vector used for dynamic-range-sensitive accumulation
pub type DVector = glam::DVec2;

/// Complex-style product of two 2D vectors, treating each as `x + iy`.
///
/// Used by the galaxies scenario to rotate and scale cluster coordinates in
/// one multiplication.
#[inline]
pub fn complex_mul(a: Vector, b: Vector) -> Vector {
    Vector::new(a.x * b.x - a.y * b.y, a.x * b.y + a.y * b.x)
}

/// A vector of magnitude `r` at angle `theta` from the positive x axis.
#[inline]
pub fn polar(r: Scalar, theta: Scalar) -> Vector {
    Vector::from_angle(theta) * r
}
