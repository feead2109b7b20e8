pub mod error;
pub mod generator;
pub mod verify;

pub use error::{GeneratorError, Result};
pub use generator::{RandomMatrixGenerator, DEFAULT_MAX, DEFAULT_MIN};
pub use verify::{spot_check, SpotCheck};
