use std::fmt::Debug;

use crate::element::Element;
use crate::error::Result;
use crate::matrix::Matrix;

/// Trait for pluggable multiplication backends.
///
/// Every backend computes the same product,
/// `C[i][j] = sum over k of A[i][k] * B[k][j]`, with the per-cell sum taken
/// in increasing `k`. Backends differ only in how cells are scheduled.
pub trait MultiplyBackend<T: Element>: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "naive", "row-parallel").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// Inputs are borrowed and never modified; the result is a new matrix.
    ///
    /// # Errors
    /// - `DimensionMismatch` if `a.side() != b.side()`
    /// - `NumericOverflow` if the element type reports overflow for a cell
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>>;
}
