//! Error types for the cleaning pipeline.
//!
//! Only terminal conditions live here. A non-zero engine exit is not an
//! error: it is a classified `Failed` result that still gets reported.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal errors for one invocation.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input file does not exist. Aborts before any spawn or report.
    #[error("Input file not found: {path}")]
    InputMissing { path: PathBuf },

    /// The engine binary was found neither beside the tool nor on PATH.
    #[error("Audio engine '{binary}' not found beside the tool or on PATH")]
    EngineNotFound { binary: String },

    /// File or process I/O failed outside the engine itself.
    #[error("I/O error in {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Create an input-missing error.
    pub fn input_missing(path: impl Into<PathBuf>) -> Self {
        Self::InputMissing { path: path.into() }
    }

    /// Create an engine-not-found error.
    pub fn engine_not_found(binary: impl Into<String>) -> Self {
        Self::EngineNotFound {
            binary: binary.into(),
        }
    }

    /// Create an I/O error with operation context.
    pub fn io(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
