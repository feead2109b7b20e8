use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },
    #[error("matrix error: {0}")]
    Matrix(#[from] mm_matrix::MatrixError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
