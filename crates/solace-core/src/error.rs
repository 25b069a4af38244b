use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),
}
