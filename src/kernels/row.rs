//! Checked row kernels for row-action solvers.
//!
//! Each function validates its indices and vector lengths, then dispatches to the
//! storage's own [`MatrixView`] kernel. The cost is that of the storage: O(ncols) for a
//! dense row, O(nnz in the column) for a row of a transposed [`CscMatrix`]. Rows are
//! never copied out of the matrix. Row indices are 0-based.
//!
//! [`CscMatrix`]: crate::matrix::sparse::CscMatrix

use crate::core::scalar::Scalar;
use crate::core::traits::MatrixView;
use crate::error::KError;

/// Squared Euclidean norm of row `i`: Σₙ |A[i, n]|².
pub fn row_norm2<T, M>(a: &M, i: usize) -> Result<T::Real, KError>
where
    T: Scalar,
    M: MatrixView<T> + ?Sized,
{
    KError::check_index("row", i, a.nrows())?;
    Ok(a.row_norm2(i))
}

/// Unconjugated product of row `k` with `x`: Σₙ A[k, n]·x[n].
///
/// Entries of `A` are used as stored, also for complex data, since the row acts as one
/// equation of the forward operator.
pub fn dot_with_matrix_row<T, M>(a: &M, x: &[T], k: usize) -> Result<T, KError>
where
    T: Scalar,
    M: MatrixView<T> + ?Sized,
{
    KError::check_index("row", k, a.nrows())?;
    KError::check_len("x", a.ncols(), x.len())?;
    Ok(a.row_dot(x, k))
}

/// Kaczmarz update `y += alpha·conj(A[k, :])`.
pub fn row_axpy_conj<T, M>(a: &M, k: usize, alpha: T, y: &mut [T]) -> Result<(), KError>
where
    T: Scalar,
    M: MatrixView<T> + ?Sized,
{
    KError::check_index("row", k, a.nrows())?;
    KError::check_len("y", a.ncols(), y.len())?;
    a.row_axpy_conj(k, alpha, y);
    Ok(())
}

/// Squared norm of every row, as computed once before a sweep.
pub fn row_energies<T, M>(a: &M) -> Vec<T::Real>
where
    T: Scalar,
    M: MatrixView<T> + ?Sized,
{
    (0..a.nrows()).map(|i| a.row_norm2(i)).collect()
}

/// Bounds-checked element access.
pub fn element<T, M>(a: &M, i: usize, j: usize) -> Result<T, KError>
where
    T: Scalar,
    M: MatrixView<T> + ?Sized,
{
    a.try_get(i, j)
}
