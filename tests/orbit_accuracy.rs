//! Orbit accuracy tests
//!
//! Long-horizon integrations against orbits whose behavior is known:
//! a circular Kepler orbit held for 2.5 million steps, the shell-theorem
//! interior, a fall through an overlapping disk, and one period of the
//! figure-8 three-body choreography through the full simulation table.

use dustdrift::prelude::*;
use std::f32::consts::{FRAC_PI_4, SQRT_2};

const DT: Scalar = 0.0625;
const LONG_RUN: usize = 2_500_000;

/// Inverse-square field of a unit point mass at the origin.
fn unit_point_mass(xy: Vector) -> Vector {
    let r = 1.0 / xy.length();
    -r * r * r * xy
}

#[test]
fn yoshida_holds_a_circular_orbit_for_millions_of_steps() {
    let integrator = Yoshida4;
    let mut position = Vector::new(1.0, 0.0);
    let mut velocity = Vector::new(0.0, 1.0);
    let dt = 0.03125;

    for _ in 0..LONG_RUN {
        integrator.step(&mut position, &mut velocity, &unit_point_mass, dt);
    }

    // Radius and speed stay circular; position and velocity stay
    // perpendicular.
    assert!((position.length() - 1.0).abs() < 0.01);
    assert!((velocity.length() - 1.0).abs() < 0.01);
    assert!(position.dot(velocity).abs() < 0.01);
}

#[test]
fn circular_orbit_through_the_disk_evaluator() {
    let gravity = Gravity::new(150);
    let source = Disk::new(Vector::ZERO, 0.04);
    let field = |xy: Vector| gravity.field(Disk::new(xy, 0.04), source, 1.0, None);

    let integrator = Yoshida4;
    let mut position = Vector::new(1.0, 0.0);
    let mut velocity = Vector::new(0.0, 1.0);

    for _ in 0..LONG_RUN {
        integrator.step(&mut position, &mut velocity, &field, DT);
    }

    assert!((position.length() - 1.0).abs() < 0.01);
    assert!((velocity.length() - 1.0).abs() < 0.01);
}

#[test]
fn no_force_accumulates_inside_an_engulfing_disk() {
    // A small test disk strictly inside a large source: the shell theorem
    // branch returns exactly zero, so the velocity never moves off zero.
    let gravity = Gravity::new(150);
    let source = Disk::new(Vector::ZERO, 1.0);
    let field = |xy: Vector| gravity.field(Disk::new(xy, 0.04), source, 1.0, None);

    let integrator = Yoshida4;
    let start = Vector::new(0.25, 0.0);
    let mut position = start;
    let mut velocity = Vector::ZERO;

    for _ in 0..LONG_RUN {
        integrator.step(&mut position, &mut velocity, &field, DT);
    }

    assert_eq!(velocity, Vector::ZERO);
    assert_eq!(position, start);
}

#[test]
fn falls_through_an_overlapping_disk_and_turns_around_on_the_diagonal() {
    let gravity = Gravity::new(150);
    let center = Vector::new(2.1, -4.5);
    let source = Disk::new(center, 1.0);
    let field = |xy: Vector| gravity.field(Disk::new(xy, 0.04), source, 1.0, None);

    let integrator = Yoshida4;
    let mut position = center + Vector::new(SQRT_2, SQRT_2);
    let mut velocity = Vector::ZERO;

    // Released at rest, the particle is pulled straight toward the
    // center, so its x velocity goes negative on the first step.
    integrator.step(&mut position, &mut velocity, &field, DT);
    assert!(velocity.x < 0.0);

    // It falls, passes through the disk, decelerates on the far side, and
    // turns around (x velocity changes sign) within 20 simulated seconds,
    // never straying beyond its release radius.
    let mut steps = 1;
    loop {
        integrator.step(&mut position, &mut velocity, &field, DT);
        steps += 1;
        assert!(
            steps <= 320,
            "no turnaround within 20 simulated seconds"
        );
        let r = position.distance(center);
        assert!(r <= 2.05, "strayed to r = {r} at step {steps}");
        if velocity.x > 0.0 {
            break;
        }
    }

    // Energy symmetry: the turnaround happens back at the release radius,
    // on the same diagonal (either side of the center).
    let offset = position - center;
    let r = offset.length();
    assert!((r - 2.0).abs() <= 0.1, "turnaround radius {r}");

    let angle = offset.y.atan2(offset.x);
    let near = |target: Scalar| (angle - target).abs() < 0.05;
    assert!(
        near(FRAC_PI_4) || near(-3.0 * FRAC_PI_4),
        "turnaround angle {angle}"
    );
}

#[test]
fn figure_eight_returns_home_after_one_period() {
    // Three unit masses on the Chenciner-Montgomery choreography, each
    // integrated by Yoshida against the other two through the disk
    // evaluator with compensated accumulation. One period is T = 6.32591,
    // which is 158 steps of 0.04 with G = 1.
    const RADIUS: Scalar = 0.025;
    let gravity = Gravity::new(150);
    let integrator = Yoshida4;

    let mut state: Vec<(Vector, Vector)> = scenarios::figure_eight()
        .iter()
        .map(|p| (p.position, p.velocity))
        .collect();
    let initial = state.clone();

    let dt = 0.04;
    for _ in 0..158 {
        for i in 0..state.len() {
            let field = |xy: Vector| {
                let mut a = Kahan::<Vector>::new();
                for (j, &(other, _)) in state.iter().enumerate() {
                    if i != j {
                        a += gravity.field(
                            Disk::new(xy, RADIUS),
                            Disk::new(other, RADIUS),
                            1.0,
                            None,
                        );
                    }
                }
                a.total()
            };
            let (mut position, mut velocity) = state[i];
            integrator.step(&mut position, &mut velocity, &field, dt);
            state[i] = (position, velocity);
        }
    }

    for (&(home, _), &(position, _)) in initial.iter().zip(&state) {
        let distance = home.distance(position);
        assert!(distance < 0.1, "body drifted {distance} from its start");
    }
}

#[test]
fn verlet_and_yoshida_agree_on_a_short_two_body_fall() {
    // Cross-check the two integrators through the full table: over a
    // short horizon they must tell the same story.
    let run = |integrator: Box<dyn Integrator>| {
        let mut sim = Simulation::new(integrator);
        sim.g = 1.0;
        sim.push(Particle::new(Vector::new(-1.0, 0.0), Vector::ZERO, 1.0, 0.05));
        sim.push(Particle::new(Vector::new(1.0, 0.0), Vector::ZERO, 1.0, 0.05));
        for _ in 0..50 {
            sim.step(0.005);
        }
        let p = sim.particles();
        p[0].position.distance(p[1].position)
    };

    let verlet_gap = run(Box::new(VelocityVerlet));
    let yoshida_gap = run(Box::new(Yoshida4));
    assert!((verlet_gap - yoshida_gap).abs() < 1e-3);
    assert!(verlet_gap < 2.0);
}
