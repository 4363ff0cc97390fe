//! Simulation systems

pub mod life;
