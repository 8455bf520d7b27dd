//! Simulation error types

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type for simulation runs
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while validating a scenario or rendering its plots
#[derive(Error, Debug)]
pub enum SimError {
    /// Differencing twice needs at least three samples
    #[error("Path needs at least 3 samples, got {n}")]
    TooFewSamples { n: usize },

    /// Parameter span must be finite and increasing
    #[error("Invalid parameter span [{start}, {end}]")]
    InvalidSpan { start: f64, end: f64 },

    #[error("Step size must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("Noise standard deviation must be finite and non-negative, got {0}")]
    InvalidNoise(f64),

    #[error("No cones configured")]
    EmptyLandmarks,

    /// Failed to prepare the plot directory
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Chart rendering failed
    #[error("Failed to render {}: {message}", path.display())]
    Plot { path: PathBuf, message: String },
}
