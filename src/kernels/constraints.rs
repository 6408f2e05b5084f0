//! Constraint projections applied to an iterate between solver iterations.
//!
//! All projections act in place and only on the entries selected by an optional boolean
//! mask; `None` selects every entry without allocating a mask. Unselected entries are
//! left bit-for-bit unchanged.

use crate::config::ConstraintOptions;
use crate::core::scalar::Scalar;
use crate::core::traits::LinearTransform;
use crate::error::KError;
use num_traits::Zero;

fn for_each_masked<T, F>(x: &mut [T], mask: Option<&[bool]>, mut f: F) -> Result<(), KError>
where
    F: FnMut(&mut T),
{
    match mask {
        None => x.iter_mut().for_each(f),
        Some(mask) => {
            KError::check_len("constraint mask", x.len(), mask.len())?;
            x.iter_mut()
                .zip(mask)
                .filter(|(_, keep)| **keep)
                .for_each(|(v, _)| f(v));
        }
    }
    Ok(())
}

/// Replace every masked entry by its real part.
///
/// Real element types are already real, so for them this is a no-op that ignores `x`
/// and `mask` alike; the check on `T::IS_COMPLEX` is resolved at compile time.
pub fn enforce_real<T: Scalar>(x: &mut [T], mask: Option<&[bool]>) -> Result<(), KError> {
    if !T::IS_COMPLEX {
        return Ok(());
    }
    for_each_masked(x, mask, |v| *v = T::from_real(v.re()))
}

/// Set the real part of every masked entry with a negative real part to zero.
///
/// The imaginary part is kept; real entries become exactly zero.
pub fn enforce_positive<T: Scalar>(x: &mut [T], mask: Option<&[bool]>) -> Result<(), KError> {
    for_each_masked(x, mask, |v| {
        if v.re() < T::Real::zero() {
            *v = T::from_parts(T::Real::zero(), v.im());
        }
    })
}

/// Project `x` onto the requested constraint sets.
///
/// The order is fixed: `transform` forward, real part, positivity, `transform` adjoint.
/// Without a transform the projections act on `x` directly. With one, they act on the
/// transformed coefficients and `mask` must match the transform's output length.
pub fn apply_constraints<T: Scalar>(
    x: &mut [T],
    transform: Option<&dyn LinearTransform<T>>,
    opts: &ConstraintOptions,
    mask: Option<&[bool]>,
) -> Result<(), KError> {
    log::debug!(
        "apply_constraints: len={} real={} positive={} transform={} masked={}",
        x.len(),
        opts.enforce_real,
        opts.enforce_positive,
        transform.is_some(),
        mask.is_some()
    );
    match transform {
        None => project(x, opts, mask),
        Some(w) => {
            KError::check_len("transform input", w.input_len(), x.len())?;
            if let Some(mask) = mask {
                KError::check_len("constraint mask", w.output_len(), mask.len())?;
            }
            let mut z = vec![T::zero(); w.output_len()];
            w.forward(x, &mut z);
            project(&mut z, opts, mask)?;
            w.adjoint(&z, x);
            Ok(())
        }
    }
}

fn project<T: Scalar>(z: &mut [T], opts: &ConstraintOptions, mask: Option<&[bool]>) -> Result<(), KError> {
    if opts.enforce_real {
        enforce_real(z, mask)?;
    }
    if opts.enforce_positive {
        enforce_positive(z, mask)?;
    }
    Ok(())
}
