// Compressed-column (CSC) sparse storage

use crate::core::scalar::Scalar;
use crate::core::traits::{MatShape, MatVec, MatrixView, StorageTag};
use crate::error::KError;
use crate::matrix::dense::DenseMatrix;
use crate::matrix::transpose::Transposed;
use faer::sparse::{SparseColMat, SymbolicSparseColMat};
use num_traits::Zero;

/// Sparse matrix in compressed-column form.
///
/// Column `j` owns the entries `col_ptr[j]..col_ptr[j + 1]` of `row_idx` and `values`.
/// Column kernels touch only those entries. Row kernels of the direct (non-transposed)
/// matrix have to probe every column; wrap the matrix in [`Transposed`] when its
/// columns are the rows a solver sweeps over.
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix<T> {
    nrows: usize,
    ncols: usize,
    col_ptr: Vec<usize>,
    row_idx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> CscMatrix<T> {
    /// Build a CSC from raw col‐ptr, row‐idx, and values, validating the structure.
    pub fn new(
        nrows: usize,
        ncols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, KError> {
        KError::check_len("col_ptr", ncols + 1, col_ptr.len())?;
        if col_ptr[0] != 0 {
            return Err(KError::InvalidStructure(format!(
                "col_ptr must start at 0, found {}",
                col_ptr[0]
            )));
        }
        if let Some(j) = col_ptr.windows(2).position(|w| w[1] < w[0]) {
            return Err(KError::InvalidStructure(format!(
                "col_ptr decreases at column {j}"
            )));
        }
        let nnz = col_ptr[ncols];
        KError::check_len("row_idx", nnz, row_idx.len())?;
        KError::check_len("values", nnz, values.len())?;
        for j in 0..ncols {
            let rows = &row_idx[col_ptr[j]..col_ptr[j + 1]];
            if let Some(&r) = rows.iter().find(|&&r| r >= nrows) {
                return Err(KError::IndexOutOfBounds { axis: "row", index: r, len: nrows });
            }
            if rows.windows(2).any(|w| w[1] <= w[0]) {
                return Err(KError::InvalidStructure(format!(
                    "row indices of column {j} are not strictly increasing"
                )));
            }
        }
        Ok(Self { nrows, ncols, col_ptr, row_idx, values })
    }

    /// Compress a dense matrix, dropping exact zeros.
    pub fn from_dense(a: &DenseMatrix<T>) -> Self {
        let (nrows, ncols) = (a.nrows(), a.ncols());
        let mut col_ptr = Vec::with_capacity(ncols + 1);
        let mut row_idx = Vec::new();
        let mut values = Vec::new();
        col_ptr.push(0);
        for j in 0..ncols {
            for i in 0..nrows {
                let v = a.get(i, j);
                if v != T::zero() {
                    row_idx.push(i);
                    values.push(v);
                }
            }
            col_ptr.push(row_idx.len());
        }
        Self { nrows, ncols, col_ptr, row_idx, values }
    }

    /// Hand the structure over to faer.
    pub fn into_faer(self) -> SparseColMat<usize, T> {
        let symbolic = SymbolicSparseColMat::new_checked(
            self.nrows,
            self.ncols,
            self.col_ptr,
            None, // optional col_nnz
            self.row_idx,
        );
        SparseColMat::new(symbolic, self.values)
    }

    /// Zero-copy transposed view; its rows are this matrix's compressed columns.
    pub fn transpose(&self) -> Transposed<'_, Self> {
        Transposed::new(self)
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn col_ptr(&self) -> &[usize] {
        &self.col_ptr
    }

    pub fn row_idx(&self) -> &[usize] {
        &self.row_idx
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Row indices and values stored in column `j`.
    fn col(&self, j: usize) -> (&[usize], &[T]) {
        let range = self.col_ptr[j]..self.col_ptr[j + 1];
        (&self.row_idx[range.clone()], &self.values[range])
    }

    fn find(&self, i: usize, j: usize) -> Option<T> {
        let (rows, vals) = self.col(j);
        rows.binary_search(&i).ok().map(|p| vals[p])
    }
}

impl<T> MatShape for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Scalar> MatrixView<T> for CscMatrix<T> {
    fn tag(&self) -> StorageTag {
        StorageTag::SPARSE
    }

    fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.nrows, "row index {i} out of bounds");
        self.find(i, j).unwrap_or_else(T::zero)
    }

    fn row_norm2(&self, i: usize) -> T::Real {
        assert!(i < self.nrows, "row index {i} out of bounds");
        (0..self.ncols)
            .filter_map(|j| self.find(i, j))
            .fold(T::Real::zero(), |acc, v| acc + v.abs2())
    }

    fn row_dot(&self, x: &[T], i: usize) -> T {
        assert!(i < self.nrows, "row index {i} out of bounds");
        assert_eq!(x.len(), self.ncols, "Vector length does not match the row length");
        (0..self.ncols)
            .filter_map(|j| self.find(i, j).map(|v| v * x[j]))
            .fold(T::zero(), |acc, v| acc + v)
    }

    fn row_axpy_conj(&self, i: usize, alpha: T, y: &mut [T]) {
        assert!(i < self.nrows, "row index {i} out of bounds");
        assert_eq!(y.len(), self.ncols, "Vector length does not match the row length");
        for j in 0..self.ncols {
            if let Some(v) = self.find(i, j) {
                y[j] += alpha * v.conj();
            }
        }
    }

    fn col_norm2(&self, j: usize) -> T::Real {
        let (_, vals) = self.col(j);
        vals.iter().fold(T::Real::zero(), |acc, v| acc + v.abs2())
    }

    fn col_dot(&self, x: &[T], j: usize) -> T {
        assert_eq!(x.len(), self.nrows, "Vector length does not match the column length");
        let (rows, vals) = self.col(j);
        rows.iter()
            .zip(vals)
            .fold(T::zero(), |acc, (&r, &v)| acc + v * x[r])
    }

    fn col_axpy_conj(&self, j: usize, alpha: T, y: &mut [T]) {
        assert_eq!(y.len(), self.nrows, "Vector length does not match the column length");
        let (rows, vals) = self.col(j);
        for (&r, &v) in rows.iter().zip(vals) {
            y[r] += alpha * v.conj();
        }
    }
}

impl<T: Scalar> MatVec<Vec<T>> for CscMatrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.ncols, x.len(), "Input vector x has incorrect length");
        assert_eq!(self.nrows, y.len(), "Output vector y has incorrect length");
        y.iter_mut().for_each(|v| *v = T::zero());
        for j in 0..self.ncols {
            let (rows, vals) = self.col(j);
            for (&r, &v) in rows.iter().zip(vals) {
                y[r] += v * x[j];
            }
        }
    }
}
