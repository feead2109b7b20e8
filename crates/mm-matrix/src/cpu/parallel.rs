use rayon::prelude::*;
use tracing::instrument;

use crate::backend::MultiplyBackend;
use crate::cancel::CancelFlag;
use crate::cpu::{cell, check_sides};
use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Multi-threaded backend that hands whole output rows to rayon workers.
///
/// Each worker owns a disjoint row of the output, so no locking is needed.
/// Cells are computed exactly as in [`NaiveBackend`](super::NaiveBackend),
/// which makes the results identical for every element type.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowParallelBackend;

impl RowParallelBackend {
    pub fn new() -> Self {
        RowParallelBackend
    }

    /// Same as [`MultiplyBackend::multiply`], but rows not yet started are
    /// skipped once `cancel` is set.
    ///
    /// Rows finish out of order, so `completed_rows` counts finished rows
    /// rather than a prefix of the output.
    #[instrument(skip_all, fields(backend = "row-parallel", n = a.side()))]
    pub fn multiply_cancellable<T: Element>(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        cancel: &CancelFlag,
    ) -> Result<Matrix<T>> {
        parallel_product(a, b, Some(cancel))
    }
}

impl<T: Element> MultiplyBackend<T> for RowParallelBackend {
    fn name(&self) -> &str {
        "row-parallel"
    }

    #[instrument(skip_all, fields(backend = "row-parallel", n = a.side()))]
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        parallel_product(a, b, None)
    }
}

fn parallel_product<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    cancel: Option<&CancelFlag>,
) -> Result<Matrix<T>> {
    let n = check_sides(a, b)?;
    if n == 0 {
        return Ok(Matrix::from_checked(0, Vec::new()));
    }

    let mut c = vec![T::zero(); n * n];
    let finished: Vec<bool> = c
        .par_chunks_mut(n)
        .enumerate()
        .map(|(i, out_row)| -> Result<bool> {
            if cancel.is_some_and(CancelFlag::is_cancelled) {
                return Ok(false);
            }
            let row_a = a.row(i);
            for (j, out) in out_row.iter_mut().enumerate() {
                *out = cell(row_a, b, i, j)?;
            }
            Ok(true)
        })
        .collect::<Result<_>>()?;

    if finished.iter().any(|done| !done) {
        return Err(MatrixError::Cancelled {
            completed_rows: finished.iter().filter(|done| **done).count(),
        });
    }
    Ok(Matrix::from_checked(n, c))
}
