use solace_core::error::CoreError;
use thiserror::Error;

use crate::ScaleId;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown pain scale: {0}")]
    UnknownScale(String),

    #[error("{scale}: score {score} is outside [0, {max_score}]")]
    OutOfRange {
        scale: ScaleId,
        score: f64,
        max_score: f64,
    },

    #[error("unknown component '{component_id}' for scale '{scale}'")]
    UnknownComponent { scale: ScaleId, component_id: String },

    #[error("{scale}: component '{component_id}' was scored more than once")]
    DuplicateComponent { scale: ScaleId, component_id: String },

    #[error("{scale}: component '{component_id}' was not scored")]
    MissingComponent { scale: ScaleId, component_id: String },

    #[error("{scale}: {value} is not an option of component '{component_id}'")]
    InvalidOption {
        scale: ScaleId,
        component_id: String,
        value: f64,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
