//! Core linear-algebra traits for rowact.

use crate::core::scalar::Scalar;
use crate::error::KError;

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Inner products & norms.
pub trait InnerProduct<V: ?Sized> {
    /// Associated scalar type.
    type Scalar: Scalar;
    /// Compute the Hermitian product ⟨x, y⟩ = Σ conj(xᵢ)·yᵢ.
    fn dot(&self, x: &V, y: &V) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> <Self::Scalar as Scalar>::Real;
}

/// Shape of a matrix or operator.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}

bitflags::bitflags! {
    /// Physical access pattern of a [`MatrixView`]. The empty set is a direct dense matrix.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StorageTag: u8 {
        /// Logical rows are physical columns.
        const TRANSPOSED = 0b0000_0001;
        /// Compressed-column storage.
        const SPARSE = 0b0000_0010;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Direct,
    Transposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    Dense,
    Sparse,
}

/// Read-only logical matrix exposing per-row and per-column kernels.
///
/// Every storage implements the kernels in whatever order its memory favours, so that
/// a row-action solver can walk row `i` in O(row length) for dense storage and in
/// O(nnz) when the row is a compressed column.
///
/// The methods here are the unchecked fast path: indices and vector lengths are
/// assumed valid and an out-of-range index panics through slice indexing. The
/// checked entry points live in [`crate::kernels::row`]. Indices are 0-based.
pub trait MatrixView<T: Scalar>: MatShape {
    fn tag(&self) -> StorageTag;

    fn orientation(&self) -> Orientation {
        if self.tag().contains(StorageTag::TRANSPOSED) {
            Orientation::Transposed
        } else {
            Orientation::Direct
        }
    }

    fn density(&self) -> Density {
        if self.tag().contains(StorageTag::SPARSE) {
            Density::Sparse
        } else {
            Density::Dense
        }
    }

    /// Logical element `A[i, j]`.
    fn get(&self, i: usize, j: usize) -> T;

    /// Σₙ |A[i, n]|².
    fn row_norm2(&self, i: usize) -> T::Real;
    /// Σₙ A[i, n]·x[n], without conjugating `A`.
    fn row_dot(&self, x: &[T], i: usize) -> T;
    /// y[n] += alpha·conj(A[i, n]).
    fn row_axpy_conj(&self, i: usize, alpha: T, y: &mut [T]);

    /// Σₘ |A[m, j]|².
    fn col_norm2(&self, j: usize) -> T::Real;
    /// Σₘ A[m, j]·x[m], without conjugating `A`.
    fn col_dot(&self, x: &[T], j: usize) -> T;
    /// y[m] += alpha·conj(A[m, j]).
    fn col_axpy_conj(&self, j: usize, alpha: T, y: &mut [T]);

    /// Bounds-checked [`MatrixView::get`].
    fn try_get(&self, i: usize, j: usize) -> Result<T, KError> {
        KError::check_index("row", i, self.nrows())?;
        KError::check_index("column", j, self.ncols())?;
        Ok(self.get(i, j))
    }
}

/// A linear map with an adjoint, e.g. a sparsifying transform applied around a projection.
///
/// `forward` maps `input_len()` values to `output_len()` values and `adjoint` maps back.
/// Both assert their slice lengths.
pub trait LinearTransform<T> {
    fn input_len(&self) -> usize;
    fn output_len(&self) -> usize;
    fn forward(&self, x: &[T], y: &mut [T]);
    fn adjoint(&self, y: &[T], x: &mut [T]);
}

/// y = A·x assembled one row at a time from [`MatrixView::row_dot`].
pub(crate) fn matvec_by_rows<T: Scalar, M: MatrixView<T> + ?Sized>(a: &M, x: &[T], y: &mut [T]) {
    assert_eq!(a.nrows(), y.len(), "Output vector y has incorrect length");
    assert_eq!(a.ncols(), x.len(), "Input vector x has incorrect length");
    for (i, yi) in y.iter_mut().enumerate() {
        *yi = a.row_dot(x, i);
    }
}
