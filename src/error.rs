//! Typed errors for declare-logmaker.
//!
//! Errors are grouped by the phase that raises them: configuration,
//! trace generation and log encoding.

use crate::config::OutputEncoding;
use crate::model::Symbol;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for declare-logmaker operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid generation parameters.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while drawing traces.
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Error while encoding the generated log.
    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid generation parameters, raised before any trace is drawn.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A builder was finished without a mandatory field.
    #[error("{builder}: missing required field '{field}'")]
    MissingRequiredField {
        builder: &'static str,
        field: &'static str,
    },

    /// More violating traces requested than traces in total.
    #[error("Violating traces ({violating}) exceed the number of traces in the log ({total})")]
    ViolatingExceedsTotal { violating: usize, total: usize },

    /// Inconsistent trace length bounds.
    #[error("Minimum events per trace ({min}) exceeds the maximum ({max})")]
    MinExceedsMax { min: usize, max: usize },

    /// An encoding name that matches no known encoding.
    #[error("Unknown output encoding '{0}' (expected one of: xes, mxml, strings, csv)")]
    UnknownEncoding(String),

    /// The selected encoding needs a destination path and none was given.
    #[error("Output encoding '{encoding}' requires an output path")]
    MissingOutputPath { encoding: OutputEncoding },

    /// The output path is too short (or not valid UTF-8) to name the legend
    /// file the plain-strings encoding writes next to it.
    #[error("Output path {} cannot name a legend file", .path.display())]
    LegendPathUnderivable { path: PathBuf },
}

/// Error while drawing traces from the walkers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    /// A walk produced a symbol the archive cannot translate.
    #[error("Trace {trace}: symbol '{symbol}' has no task in the archive")]
    UnknownSymbol { trace: usize, symbol: Symbol },
}

/// Error while encoding a generated log.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// Encoding requested before any log was created.
    #[error("Log not yet generated")]
    LogNotGenerated,

    /// No output encoding selected.
    #[error("Output encoding not specified in given parameters")]
    EncodingNotSpecified,

    /// Storing requested with no output path.
    #[error("Output file not specified in given parameters")]
    OutputPathNotSpecified,

    /// The output path is too short (or not valid UTF-8) to derive the legend file name.
    #[error("Cannot derive a legend file name from output path {}", .path.display())]
    LegendPathUnderivable { path: PathBuf },

    /// The encoding is known but has no encoder yet.
    #[error("Support for the '{0}' encoding is still work-in-progress")]
    Unsupported(OutputEncoding),
}

/// Result type alias using declare-logmaker's Error.
pub type LogMakerResult<T> = std::result::Result<T, Error>;
