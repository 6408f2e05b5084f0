//! Zero-copy transposed view over any [`MatrixView`].
//!
//! `Transposed` swaps the roles of rows and columns without moving data: logical row
//! `k` of the view is physical column `k` of the wrapped matrix. For a column-major
//! dense matrix that column is contiguous, and for a [`CscMatrix`] it is exactly one
//! compressed column, so row kernels on the view cost O(nnz in that column).
//!
//! The transpose is plain, not conjugating.
//!
//! [`CscMatrix`]: crate::matrix::sparse::CscMatrix

use crate::core::scalar::Scalar;
use crate::core::traits::{matvec_by_rows, MatShape, MatVec, MatrixView, StorageTag};

#[derive(Debug)]
pub struct Transposed<'a, M: ?Sized> {
    inner: &'a M,
}

impl<'a, M: ?Sized> Clone for Transposed<'a, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, M: ?Sized> Copy for Transposed<'a, M> {}

impl<'a, M: ?Sized> Transposed<'a, M> {
    pub fn new(inner: &'a M) -> Self {
        Self { inner }
    }

    /// The wrapped matrix.
    pub fn inner(&self) -> &'a M {
        self.inner
    }
}

impl<'a, M: MatShape + ?Sized> MatShape for Transposed<'a, M> {
    fn nrows(&self) -> usize {
        self.inner.ncols()
    }
    fn ncols(&self) -> usize {
        self.inner.nrows()
    }
}

impl<'a, T: Scalar, M: MatrixView<T> + ?Sized> MatrixView<T> for Transposed<'a, M> {
    fn tag(&self) -> StorageTag {
        self.inner.tag() ^ StorageTag::TRANSPOSED
    }

    fn get(&self, i: usize, j: usize) -> T {
        self.inner.get(j, i)
    }

    fn row_norm2(&self, i: usize) -> T::Real {
        self.inner.col_norm2(i)
    }

    fn row_dot(&self, x: &[T], i: usize) -> T {
        self.inner.col_dot(x, i)
    }

    fn row_axpy_conj(&self, i: usize, alpha: T, y: &mut [T]) {
        self.inner.col_axpy_conj(i, alpha, y)
    }

    fn col_norm2(&self, j: usize) -> T::Real {
        self.inner.row_norm2(j)
    }

    fn col_dot(&self, x: &[T], j: usize) -> T {
        self.inner.row_dot(x, j)
    }

    fn col_axpy_conj(&self, j: usize, alpha: T, y: &mut [T]) {
        self.inner.row_axpy_conj(j, alpha, y)
    }
}

impl<'a, T: Scalar, M: MatrixView<T> + ?Sized> MatVec<Vec<T>> for Transposed<'a, M> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        matvec_by_rows(self, x, y)
    }
}
