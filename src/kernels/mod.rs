//! Row kernels and constraint projections invoked by an outer row-action solver.

pub mod constraints;
pub mod row;

pub use constraints::{apply_constraints, enforce_positive, enforce_real};
pub use row::{dot_with_matrix_row, element, row_axpy_conj, row_energies, row_norm2};
