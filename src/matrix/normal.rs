//! Normal operator AᴴA assembled from row kernels.

use crate::core::scalar::Scalar;
use crate::core::traits::{MatShape, MatVec, MatrixView};

/// Applies `y = Aᴴ(A x)` one row at a time: `tₖ = A[k,:]·x`, then `y += tₖ·conj(A[k,:])`.
///
/// The operator is square with dimension `A.ncols()`. Its dominant eigenvalue is the
/// squared spectral norm of `A`, which bounds the step size of gradient-type solvers.
#[derive(Debug)]
pub struct NormalOperator<'a, M: ?Sized> {
    inner: &'a M,
}

impl<'a, M: ?Sized> NormalOperator<'a, M> {
    pub fn new(inner: &'a M) -> Self {
        Self { inner }
    }
}

impl<'a, M: MatShape + ?Sized> MatShape for NormalOperator<'a, M> {
    fn nrows(&self) -> usize {
        self.inner.ncols()
    }
    fn ncols(&self) -> usize {
        self.inner.ncols()
    }
}

impl<'a, T: Scalar, M: MatrixView<T> + ?Sized> MatVec<Vec<T>> for NormalOperator<'a, M> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        let n = self.inner.ncols();
        assert_eq!(n, x.len(), "Input vector x has incorrect length");
        assert_eq!(n, y.len(), "Output vector y has incorrect length");
        y.iter_mut().for_each(|v| *v = T::zero());
        for k in 0..self.inner.nrows() {
            let t = self.inner.row_dot(x, k);
            self.inner.row_axpy_conj(k, t, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::dense::DenseMatrix;
    use crate::matrix::sparse::CscMatrix;
    use num_complex::Complex64;

    #[test]
    fn normal_operator_matches_explicit_product() {
        // A = [[1,2],[0,1],[1,0]], AᵀA = [[2,2],[2,5]]
        let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let op = NormalOperator::new(&a);
        let mut y = vec![0.0; 2];
        op.matvec(&vec![1.0, -1.0], &mut y);
        assert_eq!(y, vec![0.0, -3.0]);
        assert_eq!((op.nrows(), op.ncols()), (2, 2));

        let s = CscMatrix::from_dense(&a);
        let mut ys = vec![0.0; 2];
        NormalOperator::new(&s).matvec(&vec![1.0, -1.0], &mut ys);
        assert_eq!(ys, y);
    }

    #[test]
    fn complex_normal_operator_is_hermitian_product() {
        let i = Complex64::new(0.0, 1.0);
        let a = DenseMatrix::from_rows(&[vec![i, Complex64::new(1.0, 0.0)]]).unwrap();
        let mut y = vec![Complex64::new(0.0, 0.0); 2];
        NormalOperator::new(&a).matvec(&vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)], &mut y);
        // A e₀ = i, so AᴴA e₀ = i·conj(A[0,:]) = [1, i]
        assert_eq!(y, vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)]);
    }
}
