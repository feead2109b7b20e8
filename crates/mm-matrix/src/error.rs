use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("dimension mismatch: [{left}x{left}] @ [{right}x{right}]")]
    DimensionMismatch { left: usize, right: usize },
    #[error("ragged row {row}: expected {expected} elements, got {got}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("data length {len} does not form a {side}x{side} matrix")]
    NotSquare { side: usize, len: usize },
    #[error("numeric overflow while accumulating cell ({row}, {col})")]
    NumericOverflow { row: usize, col: usize },
    #[error("multiplication cancelled after {completed_rows} rows")]
    Cancelled { completed_rows: usize },
}

impl MatrixError {
    /// True for every error caused by the shape of an input rather than its
    /// values.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            MatrixError::DimensionMismatch { .. }
                | MatrixError::RaggedRow { .. }
                | MatrixError::NotSquare { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
