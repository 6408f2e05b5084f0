//! Dense matrix over an owned contiguous buffer.
//!
//! A `DenseMatrix` stores its elements either column-major (the faer convention) or
//! row-major. Rows and columns are never materialized: every kernel walks a strided
//! lane of the buffer, so a row costs O(ncols) regardless of layout, and the lane that
//! matches the layout is read contiguously.

use crate::core::scalar::Scalar;
use crate::core::traits::{matvec_by_rows, LinearTransform, MatShape, MatVec, MatrixView, StorageTag};
use crate::error::KError;
use crate::matrix::transpose::Transposed;
use faer::{Mat, MatRef};
use num_traits::Zero;

/// Physical element order of a [`DenseMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    ColMajor,
    RowMajor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    nrows: usize,
    ncols: usize,
    layout: Layout,
    data: Vec<T>,
}

impl<T: Scalar> DenseMatrix<T> {
    /// Construct from raw column-major storage.
    pub fn from_col_major(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, KError> {
        Self::from_raw(nrows, ncols, Layout::ColMajor, data)
    }

    /// Construct from raw row-major storage.
    pub fn from_row_major(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, KError> {
        Self::from_raw(nrows, ncols, Layout::RowMajor, data)
    }

    pub fn from_raw(nrows: usize, ncols: usize, layout: Layout, data: Vec<T>) -> Result<Self, KError> {
        KError::check_len("dense buffer", nrows * ncols, data.len())?;
        Ok(Self { nrows, ncols, layout, data })
    }

    /// Row-major matrix from a list of equally long rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, KError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            KError::check_len("row length", ncols, row.len())?;
            data.extend_from_slice(row);
        }
        Self::from_row_major(nrows, ncols, data)
    }

    /// Copy a faer matrix into column-major storage.
    pub fn from_faer(m: MatRef<'_, T>) -> Self {
        let (nrows, ncols) = (m.nrows(), m.ncols());
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(m[(i, j)]);
            }
        }
        Self { nrows, ncols, layout: Layout::ColMajor, data }
    }

    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.nrows, self.ncols, |i, j| self.data[self.offset(i, j)])
    }

    /// The same logical matrix with the other physical layout.
    pub fn to_layout(&self, layout: Layout) -> Self {
        if layout == self.layout {
            return self.clone();
        }
        let mut data = Vec::with_capacity(self.data.len());
        match layout {
            Layout::ColMajor => {
                for j in 0..self.ncols {
                    data.extend(self.col_lane(j).copied());
                }
            }
            Layout::RowMajor => {
                for i in 0..self.nrows {
                    data.extend(self.row_lane(i).copied());
                }
            }
        }
        Self { nrows: self.nrows, ncols: self.ncols, layout, data }
    }

    /// Zero-copy transposed view.
    pub fn transpose(&self) -> Transposed<'_, Self> {
        Transposed::new(self)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        match self.layout {
            Layout::ColMajor => i + j * self.nrows,
            Layout::RowMajor => i * self.ncols + j,
        }
    }

    fn lane(&self, start: usize, step: usize, len: usize) -> impl ExactSizeIterator<Item = &T> + '_ {
        // a row of a 0-column matrix (or vice versa) starts past the end of the buffer
        let tail = if len == 0 { &[][..] } else { &self.data[start..] };
        tail.iter().step_by(step).take(len)
    }

    fn row_lane(&self, i: usize) -> impl ExactSizeIterator<Item = &T> + '_ {
        assert!(i < self.nrows, "row index {i} out of bounds (nrows {})", self.nrows);
        match self.layout {
            Layout::ColMajor => self.lane(i, self.nrows, self.ncols),
            Layout::RowMajor => self.lane(i * self.ncols, 1, self.ncols),
        }
    }

    fn col_lane(&self, j: usize) -> impl ExactSizeIterator<Item = &T> + '_ {
        assert!(j < self.ncols, "column index {j} out of bounds (ncols {})", self.ncols);
        match self.layout {
            Layout::ColMajor => self.lane(j * self.nrows, 1, self.nrows),
            Layout::RowMajor => self.lane(j, self.ncols, self.nrows),
        }
    }
}

fn lane_norm2<'a, T: Scalar>(lane: impl Iterator<Item = &'a T>) -> T::Real {
    lane.fold(T::Real::zero(), |acc, v| acc + v.abs2())
}

fn lane_dot<'a, T: Scalar>(lane: impl ExactSizeIterator<Item = &'a T>, x: &[T]) -> T {
    assert_eq!(lane.len(), x.len(), "Vector length does not match the lane length");
    lane.zip(x).fold(T::zero(), |acc, (a, b)| acc + *a * *b)
}

fn lane_axpy_conj<'a, T: Scalar>(lane: impl ExactSizeIterator<Item = &'a T>, alpha: T, y: &mut [T]) {
    assert_eq!(lane.len(), y.len(), "Vector length does not match the lane length");
    for (a, yi) in lane.zip(y.iter_mut()) {
        *yi += alpha * a.conj();
    }
}

impl<T> MatShape for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Scalar> MatrixView<T> for DenseMatrix<T> {
    fn tag(&self) -> StorageTag {
        StorageTag::empty()
    }

    fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of bounds");
        self.data[self.offset(i, j)]
    }

    fn row_norm2(&self, i: usize) -> T::Real {
        lane_norm2(self.row_lane(i))
    }

    fn row_dot(&self, x: &[T], i: usize) -> T {
        lane_dot(self.row_lane(i), x)
    }

    fn row_axpy_conj(&self, i: usize, alpha: T, y: &mut [T]) {
        lane_axpy_conj(self.row_lane(i), alpha, y)
    }

    fn col_norm2(&self, j: usize) -> T::Real {
        lane_norm2(self.col_lane(j))
    }

    fn col_dot(&self, x: &[T], j: usize) -> T {
        lane_dot(self.col_lane(j), x)
    }

    fn col_axpy_conj(&self, j: usize, alpha: T, y: &mut [T]) {
        lane_axpy_conj(self.col_lane(j), alpha, y)
    }
}

impl<T: Scalar> MatVec<Vec<T>> for DenseMatrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        matvec_by_rows(self, x, y)
    }
}

/// `forward` applies A, `adjoint` applies Aᴴ.
impl<T: Scalar> LinearTransform<T> for DenseMatrix<T> {
    fn input_len(&self) -> usize {
        self.ncols
    }

    fn output_len(&self) -> usize {
        self.nrows
    }

    fn forward(&self, x: &[T], y: &mut [T]) {
        matvec_by_rows(self, x, y)
    }

    fn adjoint(&self, y: &[T], x: &mut [T]) {
        assert_eq!(self.nrows, y.len(), "Input vector y has incorrect length");
        assert_eq!(self.ncols, x.len(), "Output vector x has incorrect length");
        x.iter_mut().for_each(|v| *v = T::zero());
        for (i, &yi) in y.iter().enumerate() {
            self.row_axpy_conj(i, yi, x);
        }
    }
}
