//! `mm-scaling` - Measures how multiplication time grows with matrix size.
//!
//! This crate provides:
//! - `measure` and `format_duration` for timing single calls
//! - `ScalingConfig`, the parameters of an experiment
//! - `run_scaling`, which generates, multiplies and spot-checks matrices of
//!   increasing size and reports growth ratios next to the n^3 prediction

pub mod config;
pub mod error;
pub mod runner;
pub mod timing;

pub use config::ScalingConfig;
pub use error::{Result, ScalingError};
pub use runner::{run_scaling, GrowthStep, ScalingReport, ScalingSample};
pub use timing::{format_duration, measure};
