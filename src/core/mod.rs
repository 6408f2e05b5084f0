//! Core scalar abstraction, traits and foreign-type wrappers.

pub mod scalar;
pub mod traits;
pub mod wrappers;

pub use scalar::{RealScalar, Scalar};
pub use traits::{
    Density, InnerProduct, LinearTransform, MatShape, MatVec, MatrixView, Orientation, StorageTag,
};
