//! Power iteration for the dominant eigenvalue of a square operator.
//!
//! Row-action and gradient-type solvers pick their step size from the spectral radius of
//! the normal operator AᴴA (see [`NormalOperator`]). The estimate only has to be good to a
//! couple of digits, so the iteration stops on a loose relative-change criterion and
//! returns whatever it has once the iteration budget is spent.
//!
//! # Algorithm
//!
//! Starting from a random vector `b`, each step normalizes `b`, applies the operator and
//! forms the Rayleigh quotient `λ = ⟨b_old, b_new⟩ / ⟨b_old, b_old⟩`. The iteration stops
//! when `|λ/λ_prev − 1| < rel_tol`; the first step has no predecessor and never stops.
//!
//! The estimate starts out infinite, which is what `max_iter == 0` returns. A zero start
//! vector or an operator that maps it to zero produces a non-finite estimate, which is
//! returned as is.
//!
//! [`NormalOperator`]: crate::matrix::normal::NormalOperator

use crate::config::PowerIterOptions;
use crate::core::scalar::{RealScalar, Scalar};
use crate::core::traits::{InnerProduct, MatShape, MatVec};
use crate::error::KError;
use crate::utils::convergence::EigenEstimate;
use num_traits::{Float, One};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Best-effort dominant eigenvalue of `op`.
pub fn power_iterations<T, A>(op: &A, opts: &PowerIterOptions<T::Real>) -> Result<T, KError>
where
    T: Scalar,
    A: MatVec<Vec<T>> + MatShape + ?Sized,
{
    power_iterations_with_stats(op, opts).map(|est| est.value)
}

/// Like [`power_iterations`], also reporting the iteration count and whether the
/// relative-change criterion was met.
pub fn power_iterations_with_stats<T, A>(
    op: &A,
    opts: &PowerIterOptions<T::Real>,
) -> Result<EigenEstimate<T>, KError>
where
    T: Scalar,
    A: MatVec<Vec<T>> + MatShape + ?Sized,
{
    if op.nrows() != op.ncols() {
        return Err(KError::NotSquare { nrows: op.nrows(), ncols: op.ncols() });
    }
    let n = op.ncols();
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut b: Vec<T> = (0..n)
        .map(|_| {
            let re: f64 = rng.sample(StandardNormal);
            let im: f64 = rng.sample(StandardNormal);
            T::from_parts(T::Real::of(re), T::Real::of(im))
        })
        .collect();
    let mut b_old = vec![T::zero(); n];

    let ip = ();
    let mut lambda_prev: Option<T> = None;
    let mut lambda = T::from_real(T::Real::infinity());
    for iter in 1..=opts.max_iter {
        let inv = T::Real::one() / ip.norm(&b[..]);
        b.iter_mut().for_each(|v| *v = v.scale(inv));
        std::mem::swap(&mut b, &mut b_old);
        op.matvec(&b_old, &mut b);

        lambda = ip.dot(&b_old[..], &b[..]) / ip.dot(&b_old[..], &b_old[..]);
        let change = lambda_prev.map(|prev| (lambda / prev - T::one()).abs());
        log::debug!("power iteration {iter}: lambda={lambda:?} rel_change={change:?}");
        if change.is_some_and(|c| c < opts.rel_tol) {
            return Ok(EigenEstimate { value: lambda, iterations: iter, converged: true });
        }
        lambda_prev = Some(lambda);
    }
    log::debug!(
        "power iteration stopped after {} applications without meeting rel_tol={:?}",
        opts.max_iter,
        opts.rel_tol
    );
    Ok(EigenEstimate { value: lambda, iterations: opts.max_iter, converged: false })
}
