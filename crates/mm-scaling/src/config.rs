use mm_random::{RandomMatrixGenerator, DEFAULT_MAX, DEFAULT_MIN};

use crate::error::{Result, ScalingError};

/// Parameters of a scaling experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingConfig {
    /// Matrix side lengths to measure, in the order they are run.
    pub sizes: Vec<usize>,
    /// Smallest generated element (inclusive).
    pub min_val: i64,
    /// Largest generated element (inclusive).
    pub max_val: i64,
    /// Cells recomputed per product to verify it.
    pub spot_checks: usize,
    /// Seed for the RNG that drives generation and spot checks.
    pub seed: u64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 50, 100, 200],
            min_val: DEFAULT_MIN,
            max_val: DEFAULT_MAX,
            spot_checks: 5,
            seed: 42,
        }
    }
}

impl ScalingConfig {
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_range(mut self, min_val: i64, max_val: i64) -> Self {
        self.min_val = min_val;
        self.max_val = max_val;
        self
    }

    pub fn with_spot_checks(mut self, spot_checks: usize) -> Self {
        self.spot_checks = spot_checks;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the config without running anything.
    ///
    /// # Errors
    /// - `EmptySizes` if `sizes` is empty
    /// - `Generator(InvalidRange)` if `min_val > max_val`
    pub fn validate(&self) -> Result<()> {
        self.generator().map(|_| ())
    }

    /// The matrix generator described by this config.
    pub fn generator(&self) -> Result<RandomMatrixGenerator<i64>> {
        if self.sizes.is_empty() {
            return Err(ScalingError::EmptySizes);
        }
        Ok(RandomMatrixGenerator::new(self.min_val, self.max_val)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = ScalingConfig::default();
        assert_eq!(c.sizes, vec![10, 50, 100, 200]);
        assert_eq!((c.min_val, c.max_val), (0, 99));
        assert_eq!(c.spot_checks, 5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let c = ScalingConfig::default()
            .with_sizes(vec![3])
            .with_range(-5, 5)
            .with_spot_checks(2)
            .with_seed(9);
        assert_eq!(
            c,
            ScalingConfig {
                sizes: vec![3],
                min_val: -5,
                max_val: 5,
                spot_checks: 2,
                seed: 9,
            }
        );
    }

    #[test]
    fn test_empty_sizes() {
        let c = ScalingConfig::default().with_sizes(vec![]);
        assert_eq!(c.validate(), Err(ScalingError::EmptySizes));
    }

    #[test]
    fn test_inverted_range() {
        let c = ScalingConfig::default().with_range(10, 1);
        assert!(matches!(c.validate(), Err(ScalingError::Generator(_))));
    }
}
