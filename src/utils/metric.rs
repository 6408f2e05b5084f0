//! Scale-calibrated normalized root-mean-square deviation.

use crate::core::scalar::{RealScalar, Scalar};
use crate::core::traits::InnerProduct;
use crate::error::KError;
use num_traits::{Float, One, Zero};

/// Normalized RMS deviation between `reference` and `candidate`.
///
/// `candidate` is first rescaled by the real least-squares factor
/// `α = Re(⟨r, c⟩ + ⟨c, r⟩) / (2⟨c, c⟩)` (`α = 1` for a zero candidate), so a candidate
/// that only differs by a real scale scores 0. The RMS of `r − α·c` is then divided by
/// the dynamic range `max|rᵢ| − min|rᵢ|` of the reference.
///
/// A constant-magnitude reference has zero dynamic range and yields a non-finite result;
/// callers monitoring convergence must guard against it.
pub fn nrmsd<T: Scalar>(reference: &[T], candidate: &[T]) -> Result<T::Real, KError> {
    KError::check_len("candidate", reference.len(), candidate.len())?;
    let ip = ();
    let alpha = if ip.norm(candidate) > T::Real::zero() {
        let cross = ip.dot(reference, candidate) + ip.dot(candidate, reference);
        cross.re() / (T::Real::of(2.0) * ip.dot(candidate, candidate).re())
    } else {
        T::Real::one()
    };

    let sq = reference
        .iter()
        .zip(candidate)
        .fold(T::Real::zero(), |acc, (&r, &c)| acc + (r - c.scale(alpha)).abs2());
    let rms = (sq / T::Real::of(reference.len() as f64)).sqrt();

    let (lo, hi) = reference.iter().fold(
        (T::Real::infinity(), T::Real::neg_infinity()),
        |(lo, hi), v| {
            let m = v.abs();
            (lo.min(m), hi.max(m))
        },
    );
    Ok(rms / (hi - lo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    #[test]
    fn identical_vectors_score_zero() {
        let r = [1.0, 2.0, 4.0];
        assert_abs_diff_eq!(nrmsd(&r, &r).unwrap(), 0.0, epsilon = 1e-14);
    }

    #[test]
    fn known_value() {
        // candidate = 0 → α = 1, rms = √(21/3), range = 3
        let r = [1.0, 2.0, 4.0];
        let got = nrmsd(&r, &[0.0; 3]).unwrap();
        assert_abs_diff_eq!(got, 7.0f64.sqrt() / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn complex_reference_is_scale_invariant_for_real_factors() {
        let r = [Complex64::new(1.0, 1.0), Complex64::new(0.0, 3.0), Complex64::new(-2.0, 0.5)];
        let c: Vec<_> = r.iter().map(|v| *v * -2.5).collect();
        assert_abs_diff_eq!(nrmsd(&r, &c).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_reference_is_not_finite() {
        let r = [2.0f64, 2.0];
        assert!(!nrmsd(&r, &[1.0, 3.0]).unwrap().is_finite());
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert!(matches!(
            nrmsd(&[1.0, 2.0], &[1.0]),
            Err(KError::DimensionMismatch { what: "candidate", expected: 2, found: 1 })
        ));
    }
}
