//! Simulator error definitions.
//!
//! The error taxonomy is deliberately small: everything that can fail does so
//! at the driver boundary, before or between ticks. Illegal instructions and
//! fetch failures are architectural events handled inside the pipeline and
//! never surface here; `Core::tick` itself is infallible.

use thiserror::Error;

/// Errors surfaced while constructing or configuring a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// The firmware image could not be read from disk.
    #[error("failed to load firmware image '{path}': {source}")]
    FirmwareLoad {
        /// Path of the image that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON configuration document failed to deserialize.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
