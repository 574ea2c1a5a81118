use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicsError {
    #[error("actor id pool exhausted")]
    IdPoolExhausted,
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    // Other core-specific errors can be added here
}
