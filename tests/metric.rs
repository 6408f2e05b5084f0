//! Tests for the normalized RMS deviation and the iteration log that records it.

use approx::assert_abs_diff_eq;
use rand::Rng;
use rowact::{nrmsd, IterationLog};

fn random_vec(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.r#gen::<f64>() * 4.0 - 2.0).collect()
}

#[test]
fn reference_against_itself_is_zero() {
    let r = random_vec(64);
    assert_abs_diff_eq!(nrmsd(&r, &r).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn real_rescaling_is_ignored() {
    let r = random_vec(64);
    for c in [0.1, 3.0, -2.0, 1e4] {
        let scaled: Vec<f64> = r.iter().map(|v| v * c).collect();
        assert_abs_diff_eq!(nrmsd(&r, &scaled).unwrap(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn metric_is_non_negative_and_grows_with_noise() {
    let r = random_vec(128);
    let noise = random_vec(128);
    let small: Vec<f64> = r.iter().zip(&noise).map(|(a, b)| a + 0.01 * b).collect();
    let large: Vec<f64> = r.iter().zip(&noise).map(|(a, b)| a + 0.5 * b).collect();
    let e_small = nrmsd(&r, &small).unwrap();
    let e_large = nrmsd(&r, &large).unwrap();
    assert!(e_small >= 0.0);
    assert!(e_small < e_large);
}

#[test]
fn iteration_log_tracks_error_against_reference() {
    let reference = vec![1.0, -1.0, 2.0];
    let mut log = IterationLog::new(Some(reference.clone()), false);
    log.record(1.0, &[0.0, 0.0, 0.0]).unwrap();
    log.record(0.1, &[0.9, -1.1, 2.0]).unwrap();
    log.record(0.0, &reference).unwrap();
    assert_eq!(log.len(), 3);
    let errs = log.errors();
    assert!(errs[0] > errs[1]);
    assert_abs_diff_eq!(errs[2], 0.0, epsilon = 1e-14);
}
