//! Spectral estimates used to set up iterative solvers.

pub mod power;
pub use power::{power_iterations, power_iterations_with_stats};
