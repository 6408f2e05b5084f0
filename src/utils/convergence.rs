//! Convergence records for iterative estimators and row-action solvers.

use crate::core::scalar::Scalar;
use crate::error::KError;
use crate::utils::metric::nrmsd;

/// Outcome of a best-effort iterative estimate.
#[derive(Clone, Debug, PartialEq)]
pub struct EigenEstimate<T> {
    pub value: T,
    /// Operator applications performed.
    pub iterations: usize,
    /// Whether the relative-change criterion was met before the iteration limit.
    pub converged: bool,
}

/// Per-iteration recorder filled by an outer solver.
///
/// Every call to [`IterationLog::record`] appends one convergence measure. When a
/// reference solution is set the [`nrmsd`] of the iterate against it is appended as
/// well, and with `store_iterates` a deep copy of the iterate is kept.
#[derive(Clone, Debug)]
pub struct IterationLog<T: Scalar> {
    reference: Option<Vec<T>>,
    store_iterates: bool,
    convergence: Vec<T::Real>,
    errors: Vec<T::Real>,
    iterates: Vec<Vec<T>>,
}

impl<T: Scalar> Default for IterationLog<T> {
    fn default() -> Self {
        Self::new(None, false)
    }
}

impl<T: Scalar> IterationLog<T> {
    pub fn new(reference: Option<Vec<T>>, store_iterates: bool) -> Self {
        Self {
            reference,
            store_iterates,
            convergence: Vec::new(),
            errors: Vec::new(),
            iterates: Vec::new(),
        }
    }

    /// Append `measure` and, as configured, the error and a copy of `x`.
    pub fn record(&mut self, measure: T::Real, x: &[T]) -> Result<(), KError> {
        if let Some(reference) = &self.reference {
            let err = nrmsd(reference, x)?;
            self.errors.push(err);
        }
        self.convergence.push(measure);
        if self.store_iterates {
            self.iterates.push(x.to_vec());
        }
        log::trace!(
            "iteration {}: measure={:?} error={:?}",
            self.convergence.len(),
            measure,
            self.errors.last()
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.convergence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.convergence.is_empty()
    }

    pub fn convergence(&self) -> &[T::Real] {
        &self.convergence
    }

    pub fn errors(&self) -> &[T::Real] {
        &self.errors
    }

    pub fn iterates(&self) -> &[Vec<T>] {
        &self.iterates
    }
}
