//! Options for the projection operator and the power iteration.
//!
//! This module provides the `ConstraintOptions` struct, which selects which projections
//! run between solver iterations, and the `PowerIterOptions` struct, which carries the
//! stopping parameters of the dominant-eigenvalue estimate.

use crate::core::scalar::RealScalar;

/// Projections applied by [`apply_constraints`](crate::kernels::constraints::apply_constraints).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintOptions {
    /// Drop the imaginary part of every masked entry.
    pub enforce_real: bool,

    /// Clamp negative real parts of masked entries to zero.
    pub enforce_positive: bool,
}

/// Stopping parameters for [`power_iterations`](crate::solver::power::power_iterations).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerIterOptions<R> {
    /// Stop once |λ/λ_prev − 1| falls below this value.
    pub rel_tol: R,

    /// Upper bound on operator applications.
    pub max_iter: usize,

    /// Seed for the random start vector; `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl<R: RealScalar> Default for PowerIterOptions<R> {
    fn default() -> Self {
        Self { rel_tol: R::of(1e-2), max_iter: 30, seed: None }
    }
}

impl<R: RealScalar> PowerIterOptions<R> {
    pub fn new(rel_tol: R, max_iter: usize) -> Self {
        Self { rel_tol, max_iter, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
