use std::cmp::Ordering;

use mm_matrix::{Element, Matrix};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::trace;

use crate::error::{GeneratorError, Result};

/// Default lower bound (inclusive) of generated values.
pub const DEFAULT_MIN: i64 = 0;
/// Default upper bound (inclusive) of generated values.
pub const DEFAULT_MAX: i64 = 99;

/// Produces square matrices of values drawn uniformly from `[min, max]`.
///
/// The generator holds no random state of its own; every call takes the
/// RNG from the caller, so a seeded RNG gives reproducible matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomMatrixGenerator<T> {
    min: T,
    max: T,
}

impl<T> RandomMatrixGenerator<T>
where
    T: Element + SampleUniform + PartialOrd,
{
    /// Create a generator for the inclusive range `[min, max]`.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `min > max` or the bounds are unordered
    /// (e.g. NaN).
    pub fn new(min: T, max: T) -> Result<Self> {
        match min.partial_cmp(&max) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { min, max }),
            _ => Err(GeneratorError::InvalidRange {
                min: format!("{:?}", min),
                max: format!("{:?}", max),
            }),
        }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> &T {
        &self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> &T {
        &self.max
    }

    /// Generate an `n x n` matrix, filling rows in order.
    ///
    /// # Panics
    /// Panics if `T` is a float type and either bound is infinite.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Matrix<T> {
        trace!(n, "generating random matrix");
        let dist = Uniform::<T>::new_inclusive(self.min.clone(), self.max.clone());
        Matrix::from_fn(n, |_, _| dist.sample(rng))
    }
}

impl Default for RandomMatrixGenerator<i64> {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}
