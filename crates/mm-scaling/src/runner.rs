use std::time::Duration;

use mm_matrix::MultiplyBackend;
use mm_random::{spot_check, SpotCheck};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

use crate::config::ScalingConfig;
use crate::error::Result;
use crate::timing::{format_duration, measure};

/// Measurements for one matrix size.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingSample {
    /// Side length.
    pub n: usize,
    /// Time to generate both operands.
    pub creation: Duration,
    /// Time spent in the backend's multiply.
    pub multiply: Duration,
    /// Result of spot-checking the product.
    pub check: SpotCheck,
}

/// Growth between two consecutive samples.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthStep {
    pub from_n: usize,
    pub to_n: usize,
    /// `to_n / from_n`.
    pub size_ratio: f64,
    /// `size_ratio^3`, what an O(n^3) algorithm predicts.
    pub expected_ratio: f64,
    /// Measured multiply-time ratio; `None` if the earlier time was zero.
    pub time_ratio: Option<f64>,
}

/// Collected samples of one run, in config order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingReport {
    pub backend: String,
    pub samples: Vec<ScalingSample>,
}

impl ScalingReport {
    /// Growth ratios between each pair of consecutive samples.
    pub fn growth(&self) -> Vec<GrowthStep> {
        self.samples
            .windows(2)
            .map(|w| {
                let (prev, curr) = (&w[0], &w[1]);
                let size_ratio = curr.n as f64 / prev.n as f64;
                let prev_secs = prev.multiply.as_secs_f64();
                let time_ratio = if prev_secs > 0.0 {
                    Some(curr.multiply.as_secs_f64() / prev_secs)
                } else {
                    None
                };
                GrowthStep {
                    from_n: prev.n,
                    to_n: curr.n,
                    size_ratio,
                    expected_ratio: size_ratio.powi(3),
                    time_ratio,
                }
            })
            .collect()
    }

    /// True when every product passed its spot check.
    pub fn all_verified(&self) -> bool {
        self.samples.iter().all(|s| s.check.passed())
    }
}

/// Runs the scaling experiment described by `config` on `backend`.
///
/// For each size: generates A and B, multiplies them, and spot-checks the
/// product. A single RNG seeded from `config.seed` drives the whole run, so
/// everything but the timings is reproducible.
///
/// # Errors
/// - config errors from [`ScalingConfig::validate`]
/// - any error returned by the backend, e.g. `NumericOverflow` for ranges
///   whose products do not fit in `i64`
#[instrument(skip_all, fields(backend = backend.name()))]
pub fn run_scaling(
    config: &ScalingConfig,
    backend: &dyn MultiplyBackend<i64>,
) -> Result<ScalingReport> {
    let generator = config.generator()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.sizes.len());

    for &n in &config.sizes {
        let ((a, b), creation) =
            measure(|| (generator.generate(n, &mut rng), generator.generate(n, &mut rng)));
        debug!(n, creation = %format_duration(creation), "operands generated");

        let (product, multiply) = measure(|| backend.multiply(&a, &b));
        let c = product?;
        let check = spot_check(&a, &b, &c, config.spot_checks, &mut rng)?;

        info!(
            n,
            multiply = %format_duration(multiply),
            verified = check.passed(),
            "scaling sample"
        );
        samples.push(ScalingSample {
            n,
            creation,
            multiply,
            check,
        });
    }

    Ok(ScalingReport {
        backend: backend.name().to_string(),
        samples,
    })
}
