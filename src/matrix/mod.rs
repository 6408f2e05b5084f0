//! Matrix module: dense, compressed-column and adapter views.

pub mod dense;
pub mod normal;
pub mod sparse;
pub mod transpose;

pub use dense::{DenseMatrix, Layout};
pub use normal::NormalOperator;
pub use sparse::CscMatrix;
pub use transpose::Transposed;
