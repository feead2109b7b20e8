use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    #[error("scaling config lists no matrix sizes")]
    EmptySizes,
    #[error("generator error: {0}")]
    Generator(#[from] mm_random::GeneratorError),
    #[error("matrix error: {0}")]
    Matrix(#[from] mm_matrix::MatrixError),
}

pub type Result<T> = std::result::Result<T, ScalingError>;
