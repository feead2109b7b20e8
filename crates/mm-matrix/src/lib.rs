//! `mm-matrix` - Square matrices and the classical O(n^3) multiplication.
//!
//! This crate provides:
//! - A `Matrix` type: square, row-major, never jagged
//! - An `Element` trait whose implementations fix the overflow policy
//! - A `MultiplyBackend` trait and the reference `NaiveBackend`
//! - A row-parallel backend behind the `parallel` feature
//! - Row-boundary cancellation via `CancelFlag`

pub mod backend;
pub mod cancel;
pub mod cpu;
pub mod element;
pub mod error;
pub mod matrix;

// Re-export primary types at the crate root for convenience.
pub use backend::MultiplyBackend;
pub use cancel::CancelFlag;
#[cfg(feature = "parallel")]
pub use cpu::RowParallelBackend;
pub use cpu::NaiveBackend;
pub use element::Element;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;

/// Multiplies two square matrices with the naive triple loop.
///
/// # Errors
/// - `DimensionMismatch` if the side lengths differ
/// - `NumericOverflow` if `T` is a checked integer and a cell overflows
pub fn multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    NaiveBackend::new().multiply(a, b)
}

/// Multiplies two matrices given as sequences of rows.
///
/// Both inputs are validated before any arithmetic, so jagged input is
/// rejected rather than read past its short rows.
///
/// # Errors
/// - `RaggedRow` if either input is not square
/// - anything [`multiply`] returns
pub fn multiply_rows<T: Element>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    let a = Matrix::from_rows(a.to_vec())?;
    let b = Matrix::from_rows(b.to_vec())?;
    Ok(multiply(&a, &b)?.into_rows())
}
