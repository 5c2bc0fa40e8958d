//! Core storage: the SoA grid, its processed mask and the random source.

pub mod grid;
pub mod rng;
