use mm_matrix::{Element, Matrix, MatrixError};
use rand::Rng;
use tracing::warn;

/// Outcome of a sampled product check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpotCheck {
    /// Number of cells compared before stopping.
    pub checked: usize,
    /// First cell `(i, j)` that disagreed with the definition, if any.
    pub mismatch: Option<(usize, usize)>,
}

impl SpotCheck {
    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }
}

/// Checks `c == a @ b` at `samples` randomly chosen cells.
///
/// Each sampled cell is recomputed from the definition in O(n), so the whole
/// check costs O(samples * n). A reference sum that overflows `T` counts as
/// a mismatch. For `n == 0` there is nothing to sample and the check passes.
///
/// # Errors
/// Returns `DimensionMismatch` if the three matrices differ in side length.
pub fn spot_check<T, R>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &Matrix<T>,
    samples: usize,
    rng: &mut R,
) -> mm_matrix::Result<SpotCheck>
where
    T: Element,
    R: Rng + ?Sized,
{
    let n = a.side();
    for other in [b.side(), c.side()] {
        if other != n {
            return Err(MatrixError::DimensionMismatch {
                left: n,
                right: other,
            });
        }
    }
    if n == 0 {
        return Ok(SpotCheck {
            checked: 0,
            mismatch: None,
        });
    }

    for s in 0..samples {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        let expected = (0..n).try_fold(T::zero(), |acc, k| {
            T::checked_mul_add(&acc, &a[(i, k)], &b[(k, j)])
        });
        if expected.as_ref() != Some(&c[(i, j)]) {
            warn!(i, j, "product disagrees with definition");
            return Ok(SpotCheck {
                checked: s + 1,
                mismatch: Some((i, j)),
            });
        }
    }
    Ok(SpotCheck {
        checked: samples,
        mismatch: None,
    })
}
