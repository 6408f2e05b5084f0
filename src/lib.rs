//! rowact: storage-polymorphic kernels for row-action solvers
//!
//! This crate provides the numeric primitives that Kaczmarz-type and gradient-type
//! reconstruction solvers are built from: row kernels that give identical results for
//! dense, transposed and compressed-column storage, constraint projections, a
//! scale-calibrated error metric, and a power iteration for step-size selection.

pub mod config;
pub mod core;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::kernels::*;
pub use crate::matrix::*;
pub use crate::solver::*;
pub use crate::utils::*;
