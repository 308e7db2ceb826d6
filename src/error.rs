use thiserror::Error;

pub type SlicerResult<T> = Result<T, SlicerError>;

#[derive(Debug, Error)]
pub enum SlicerError {
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("filter sink failure: {0}")]
    Sink(String),
}
