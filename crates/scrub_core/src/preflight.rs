//! Preflight checks, run before anything observable happens.
//!
//! A failure here aborts the invocation before any process is spawned or
//! any report record is written, so these failures leave no durable
//! trace. Execution failures, by contrast, are always reported.

use std::path::{Path, PathBuf};

use crate::engine::locate_engine;
use crate::orchestrator::errors::{PipelineError, PipelineResult};

/// Verify the input file exists and the engine can be located.
///
/// Returns the resolved engine path to invoke.
pub fn run_preflight(input_path: &Path, engine_binary: &str) -> PipelineResult<PathBuf> {
    if !input_path.is_file() {
        return Err(PipelineError::input_missing(input_path));
    }

    locate_engine(engine_binary).ok_or_else(|| PipelineError::engine_not_found(engine_binary))
}
