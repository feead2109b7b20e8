#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(feature = "parallel")]
pub use parallel::RowParallelBackend;

use tracing::instrument;

use crate::backend::MultiplyBackend;
use crate::cancel::CancelFlag;
use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Single-threaded reference backend.
///
/// Runs the textbook i-j-k triple loop: row `i` of A is borrowed once per
/// output row, then each cell `(i, j)` accumulates `A[i][k] * B[k][j]` over
/// `k` into one scalar. B is walked column-wise, which is the access pattern
/// of the naive algorithm and is left as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBackend;

impl NaiveBackend {
    pub fn new() -> Self {
        NaiveBackend
    }

    /// Same as [`MultiplyBackend::multiply`], but stops at the next row
    /// boundary once `cancel` is set.
    ///
    /// # Errors
    /// Returns `Cancelled` with the number of fully computed rows. The
    /// partial product is discarded.
    #[instrument(skip_all, fields(backend = "naive", n = a.side()))]
    pub fn multiply_cancellable<T: Element>(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        cancel: &CancelFlag,
    ) -> Result<Matrix<T>> {
        naive_product(a, b, Some(cancel))
    }
}

impl<T: Element> MultiplyBackend<T> for NaiveBackend {
    fn name(&self) -> &str {
        "naive"
    }

    #[instrument(skip_all, fields(backend = "naive", n = a.side()))]
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        naive_product(a, b, None)
    }
}

fn naive_product<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    cancel: Option<&CancelFlag>,
) -> Result<Matrix<T>> {
    let n = check_sides(a, b)?;

    let mut c = Vec::with_capacity(n * n);
    for i in 0..n {
        if cancel.is_some_and(CancelFlag::is_cancelled) {
            return Err(MatrixError::Cancelled { completed_rows: i });
        }
        let row_a = a.row(i);
        for j in 0..n {
            c.push(cell(row_a, b, i, j)?);
        }
    }
    Ok(Matrix::from_checked(n, c))
}

/// Returns the shared side length, or `DimensionMismatch`.
pub(crate) fn check_sides<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<usize> {
    if a.side() != b.side() {
        return Err(MatrixError::DimensionMismatch {
            left: a.side(),
            right: b.side(),
        });
    }
    Ok(a.side())
}

/// Computes output cell `(i, j)` from row `i` of A and column `j` of B.
pub(crate) fn cell<T: Element>(row_a: &[T], b: &Matrix<T>, i: usize, j: usize) -> Result<T> {
    let n = b.side();
    let b_data = b.as_slice();
    let mut sum = T::zero();
    for (k, a_ik) in row_a.iter().enumerate() {
        sum = T::checked_mul_add(&sum, a_ik, &b_data[k * n + j])
            .ok_or(MatrixError::NumericOverflow { row: i, col: j })?;
    }
    Ok(sum)
}
