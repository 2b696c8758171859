//! Simulation core: Morton keys, the Barnes-Hut tree, pairwise gravity,
//! symplectic integrators, and the table that drives them.

pub mod barnes_hut;
pub mod disk;
pub mod gravity;
pub mod halton;
pub mod integrators;
pub mod kahan;
pub mod math;
pub mod morton;
pub mod particle;
pub mod simulation;
