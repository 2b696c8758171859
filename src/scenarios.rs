//! Initial conditions
//!
//! Thin generators feeding the simulation table: the Chenciner-Montgomery
//! figure-8 choreography and a randomized field of spinning elliptical
//! clusters.

use crate::config::ScenarioConfig;
use crate::physics::math::{complex_mul, polar, Scalar, Vector};
use crate::physics::particle::Particle;
use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal};

/// Three equal masses chasing each other around a figure-8.
///
/// Initial conditions from the Chenciner-Montgomery solution of the
/// three-body problem; stable only with `G = 1`. The radii are small
/// enough that the bodies never overlap and, just as importantly, never
/// get grouped by the tree's opening criterion at the separations the
/// orbit visits.
pub fn figure_eight() -> Vec<Particle> {
    const RADIUS: Scalar = 0.025;
    let c0 = Vector::new(-0.970_004_36, 0.243_087_53);
    let v0 = Vector::new(0.466_203_685, 0.432_365_73);
    let v1 = Vector::new(-0.932_407_37, -0.864_731_46);
    vec![
        Particle::new(c0, v0, 1.0, RADIUS),
        Particle::new(Vector::ZERO, v1, 1.0, RADIUS),
        Particle::new(-c0, v0, 1.0, RADIUS),
    ]
}

/// A field of elliptical clusters with random orientation ("galaxies").
///
/// Cluster sizes are log-normal around the square root of the particle
/// budget, so a full field is a few dozen clusters. Each cluster is a
/// normal blob stretched by log-normal ellipse axes, panned away from the
/// origin, then rotated and scaled in one complex multiplication.
pub fn galaxies<R: Rng>(config: &ScenarioConfig, rng: &mut R) -> Vec<Particle> {
    let limit = config.particles_limit;
    let cluster_size = LogNormal::new((limit as Scalar).sqrt().ln(), 1.0)
        .expect("cluster size parameters are fixed and valid");
    let axes = LogNormal::new(-0.5, 0.5).expect("axis parameters are fixed and valid");
    let mass = LogNormal::new(config.log_mean_mass, config.log_stdev_mass)
        .expect("mass spread must be finite and non-negative");
    let radius = LogNormal::new(config.log_mean_radius, config.log_stdev_radius)
        .expect("radius spread must be finite and non-negative");
    let unit_normal = Normal::new(0.0, 1.0).expect("standard normal is valid");
    let mut normal_xy =
        |rng: &mut R| Vector::new(unit_normal.sample(rng), unit_normal.sample(rng));

    let mut particles: Vec<Particle> = Vec::with_capacity(limit);
    while particles.len() < limit {
        let budget = (limit - particles.len()) as Scalar;
        let count = cluster_size.sample(rng).min(budget) as usize;
        if count == 0 {
            continue;
        }

        let first = particles.len();
        for _ in 0..count {
            particles.push(Particle::new(
                Vector::ZERO,
                Vector::ZERO,
                mass.sample(rng),
                radius.sample(rng),
            ));
        }

        let ellipse = Vector::new(axes.sample(rng), axes.sample(rng));
        let pan = normal_xy(rng) * 4.0;
        let spin = polar(4.0, rng.random_range(0.0..std::f32::consts::TAU));
        for p in &mut particles[first..] {
            p.position = complex_mul(normal_xy(rng) * ellipse / 2.0 + pan, spin);
        }
    }
    particles
}
