use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rowact::{dot_with_matrix_row, row_norm2, CscMatrix, DenseMatrix, Layout};

fn bench_row_kernels(c: &mut Criterion) {
    let (m, n) = (400, 2000);
    // ~1% fill, stored row-wise for the dense reference
    let data: Vec<f64> = (0..m * n)
        .map(|k| if k % 97 == 0 { (k as f64).sin() } else { 0.0 })
        .collect();
    // the same buffer read column-major is Aᵀ
    let at_dense = DenseMatrix::from_col_major(n, m, data.clone()).unwrap();
    let a = DenseMatrix::from_row_major(m, n, data).unwrap();
    let a_cm = a.to_layout(Layout::ColMajor);
    let at = CscMatrix::from_dense(&at_dense);
    let view = at.transpose();
    let x: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();

    c.bench_function("row_dot dense row-major", |ben| {
        ben.iter(|| dot_with_matrix_row(black_box(&a), black_box(&x), 17).unwrap())
    });
    c.bench_function("row_dot dense col-major", |ben| {
        ben.iter(|| dot_with_matrix_row(black_box(&a_cm), black_box(&x), 17).unwrap())
    });
    c.bench_function("row_dot transposed csc", |ben| {
        ben.iter(|| dot_with_matrix_row(black_box(&view), black_box(&x), 17).unwrap())
    });
    c.bench_function("row_norm2 transposed csc", |ben| {
        ben.iter(|| row_norm2(black_box(&view), 17).unwrap())
    });
}

criterion_group!(benches, bench_row_kernels);
criterion_main!(benches);
