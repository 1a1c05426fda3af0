//! Request and result records for one invocation.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};

use super::enums::{ProcessingMode, RunStatus};

/// Everything decided before the engine is spawned.
///
/// Built once per invocation and read-only afterwards.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// The audio file being cleaned.
    pub input_path: PathBuf,
    /// Selected processing profile.
    pub mode: ProcessingMode,
    /// Rendered filter expression handed to the engine.
    pub filter_chain: String,
    /// Where the cleaned file will be written.
    pub output_path: PathBuf,
    /// When the run started; also embedded in the output name.
    pub started_at: DateTime<Local>,
}

/// Measured outcome of one engine invocation.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Engine process exit code (-1 if killed by a signal).
    pub exit_code: i32,
    /// Wall-clock time spent waiting on the engine.
    pub duration: Duration,
    /// Size of the input file.
    pub input_size_bytes: u64,
    /// Size of the output file, absent when the engine left none behind.
    pub output_size_bytes: Option<u64>,
    /// Classification derived from the exit code.
    pub status: RunStatus,
}
