use thiserror::Error;

// Unified error type for rowact

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KError {
    #[error("{axis} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        axis: &'static str,
        index: usize,
        len: usize,
    },
    #[error("dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("operator is not square ({nrows}x{ncols})")]
    NotSquare { nrows: usize, ncols: usize },
    #[error("invalid matrix structure: {0}")]
    InvalidStructure(String),
}

impl KError {
    pub(crate) fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), KError> {
        if expected == found {
            Ok(())
        } else {
            Err(KError::DimensionMismatch { what, expected, found })
        }
    }

    pub(crate) fn check_index(axis: &'static str, index: usize, len: usize) -> Result<(), KError> {
        if index < len {
            Ok(())
        } else {
            Err(KError::IndexOutOfBounds { axis, index, len })
        }
    }
}
