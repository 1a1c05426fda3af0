//! The synchronous run sequence for one invocation.
//!
//! Phases, strictly in order: preflight, chain assembly and output
//! naming, engine invocation, size measurement and classification,
//! report append. The engine wait is the only long block; there is no
//! timeout and no cancellation beyond killing the process out of band.

use std::fs;
use std::path::{Path, PathBuf};

use crate::chain;
use crate::config::Settings;
use crate::engine::{EngineInvoker, InvocationSpec};
use crate::models::{ProcessingMode, RunRequest, RunResult, RunStatus};
use crate::naming::{self, Clock};
use crate::preflight;
use crate::report::RunReporter;

use super::errors::{PipelineError, PipelineResult};

/// Summary of one completed invocation.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub request: RunRequest,
    pub result: RunResult,
    /// Whether the record made it into the report file. A write failure
    /// is surfaced as a warning and does not change `result.status`.
    pub report_written: bool,
}

/// Run the whole pipeline for one input file.
///
/// Returns `Err` only for terminal conditions (preflight failures,
/// spawn/filesystem errors). A non-zero engine exit completes normally
/// with `result.status == Failed` and a report record appended, so the
/// front end can inspect the classification and exit accordingly.
pub fn run(
    settings: &Settings,
    input_path: &Path,
    mode: ProcessingMode,
    invoker: &dyn EngineInvoker,
    clock: &dyn Clock,
) -> PipelineResult<RunReport> {
    // Nothing observable may happen before preflight passes: no spawn,
    // no report record, no output directory.
    let engine_path = preflight::run_preflight(input_path, &settings.engine.binary)?;

    let started_at = clock.now();
    let filter_chain = chain::build_chain(mode).render();
    let output_dir = PathBuf::from(&settings.paths.output_folder);
    let output_path = naming::resolve_output_path(input_path, &output_dir, started_at);

    let request = RunRequest {
        input_path: input_path.to_path_buf(),
        mode,
        filter_chain,
        output_path,
        started_at,
    };

    fs::create_dir_all(&output_dir)
        .map_err(|e| PipelineError::io("creating output directory", e))?;

    let input_size_bytes = fs::metadata(input_path)
        .map_err(|e| PipelineError::io("reading input size", e))?
        .len();

    tracing::info!(
        "Cleaning {} ({}) with chain: {}",
        input_path.display(),
        mode.label(),
        request.filter_chain
    );

    let spec = InvocationSpec {
        engine_path,
        input_path: request.input_path.clone(),
        filter_chain: request.filter_chain.clone(),
        output_path: request.output_path.clone(),
    };
    let outcome = invoker
        .invoke(&spec)
        .map_err(|e| PipelineError::io("spawning engine", e))?;

    let status = RunStatus::from_exit_code(outcome.exit_code);
    let output_size_bytes = fs::metadata(&request.output_path).ok().map(|m| m.len());

    let result = RunResult {
        exit_code: outcome.exit_code,
        duration: outcome.duration,
        input_size_bytes,
        output_size_bytes,
        status,
    };

    let reporter = RunReporter::new(&settings.paths.log_file);
    let report_written = match reporter.append(&request, &result) {
        Ok(()) => true,
        Err(e) => {
            // The run keeps its classification even if the record is lost.
            tracing::warn!("Failed to append run report: {}", e);
            false
        }
    };

    Ok(RunReport {
        request,
        result,
        report_written,
    })
}
