use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FractreeError {
    // ↓ raised when a routine receives an argument outside of its domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, FractreeError>;
