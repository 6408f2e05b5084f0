//! Tests for the constraint projections: idempotence, masking, and projection through a
//! sparsifying transform.

use approx::assert_abs_diff_eq;
use num_complex::Complex64;
use rand::Rng;
use rowact::{
    apply_constraints, enforce_positive, enforce_real, ConstraintOptions, DenseMatrix, PatchTransform,
};

fn random_complex(n: usize) -> Vec<Complex64> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| Complex64::new(rng.r#gen::<f64>() - 0.5, rng.r#gen::<f64>() - 0.5))
        .collect()
}

#[test]
fn enforce_positive_is_idempotent() {
    let mut once = random_complex(32);
    enforce_positive(&mut once, None).unwrap();
    let mut twice = once.clone();
    enforce_positive(&mut twice, None).unwrap();
    assert_eq!(once, twice);
    assert!(once.iter().all(|v| v.re >= 0.0));
}

#[test]
fn enforce_real_twice_changes_nothing() {
    let mut x = random_complex(16);
    enforce_real(&mut x, None).unwrap();
    let snapshot = x.clone();
    enforce_real(&mut x, None).unwrap();
    assert_eq!(x, snapshot);
    assert!(x.iter().all(|v| v.im == 0.0));
}

#[test]
fn unmasked_entries_are_bitwise_unchanged() {
    let original = random_complex(40);
    let mask: Vec<bool> = (0..40).map(|i| i % 3 == 0).collect();
    let mut x = original.clone();
    let opts = ConstraintOptions { enforce_real: true, enforce_positive: true };
    apply_constraints(&mut x, None, &opts, Some(mask.as_slice())).unwrap();
    for ((after, before), keep) in x.iter().zip(&original).zip(&mask) {
        if *keep {
            assert_eq!(after.im, 0.0);
            assert!(after.re >= 0.0);
        } else {
            assert_eq!(after.re.to_bits(), before.re.to_bits());
            assert_eq!(after.im.to_bits(), before.im.to_bits());
        }
    }
}

#[test]
fn real_vectors_clamp_to_exact_zero() {
    let mut x = vec![-0.25, 1.5, -3.0, 0.0];
    let opts = ConstraintOptions { enforce_real: true, enforce_positive: true };
    apply_constraints(&mut x, None, &opts, None).unwrap();
    assert_eq!(x, vec![0.0, 1.5, 0.0, 0.0]);
}

#[test]
fn no_constraints_leave_vector_alone() {
    let original = random_complex(8);
    let mut x = original.clone();
    apply_constraints(&mut x, None, &ConstraintOptions::default(), None).unwrap();
    assert_eq!(x, original);
}

#[test]
fn projection_commutes_with_patch_rearrangement() {
    // 5x3 image in 2x2 patches: padding never turns negative, so projecting the
    // patches and rearranging back equals projecting the image directly.
    let patches = PatchTransform::new(5, 3, 2, 2).unwrap();
    let image: Vec<f64> = (0..15).map(|v| (v as f64 * 1.7).sin()).collect();
    let opts = ConstraintOptions { enforce_real: false, enforce_positive: true };

    let mut through = image.clone();
    apply_constraints(&mut through, Some(&patches), &opts, None).unwrap();
    let mut direct = image.clone();
    apply_constraints(&mut direct, None, &opts, None).unwrap();
    assert_eq!(through, direct);
}

#[test]
fn mask_selects_transformed_coefficients() {
    // one 2x2 patch; only its first two coefficients are constrained
    let patches = PatchTransform::new(2, 2, 2, 2).unwrap();
    let mut x = vec![-1.0, -2.0, -3.0, 4.0];
    let mask = vec![true, true, false, false];
    let opts = ConstraintOptions { enforce_real: false, enforce_positive: true };
    apply_constraints(&mut x, Some(&patches), &opts, Some(mask.as_slice())).unwrap();
    assert_eq!(x, vec![0.0, 0.0, -3.0, 4.0]);
}

#[test]
fn complex_projection_through_unitary_transform() {
    // W = diag(i, 1): Wx moves the imaginary part of x₀ into the real part
    let w = DenseMatrix::from_rows(&[
        vec![Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.0)],
        vec![Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
    ])
    .unwrap();
    let mut x = vec![Complex64::new(2.0, 3.0), Complex64::new(-1.0, 1.0)];
    let opts = ConstraintOptions { enforce_real: true, enforce_positive: false };
    apply_constraints(&mut x, Some(&w), &opts, None).unwrap();
    // Wx = [-3+2i, -1+i] → real → [-3, -1] → Wᴴ → [3i, -1]
    assert_abs_diff_eq!(x[0].re, 0.0, epsilon = 1e-14);
    assert_abs_diff_eq!(x[0].im, 3.0, epsilon = 1e-14);
    assert_abs_diff_eq!(x[1].re, -1.0, epsilon = 1e-14);
    assert_abs_diff_eq!(x[1].im, 0.0, epsilon = 1e-14);
}
