use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DosingError {
    #[error("invalid weight: {0} kg (must be a positive number)")]
    InvalidWeight(f64),

    #[error("unknown medication: {0}")]
    UnknownMedication(String),

    #[error("duplicate medication id in formulary: {0}")]
    DuplicateMedication(String),

    #[error("formulary_version {found} is newer than this build supports ({supported})")]
    UnsupportedFormularyVersion { found: u32, supported: u32 },

    #[error("malformed formulary: {0}")]
    Formulary(#[from] serde_json::Error),

    #[error("failed to read formulary at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
