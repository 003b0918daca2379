use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid surface shape: width={width}, height={height}")]
    InvalidShape { width: f64, height: f64 },

    #[error("unknown scaling policy `{0}`")]
    UnknownScaling(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("renderer failed: {0}")]
    Render(String),
}
