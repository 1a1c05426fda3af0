//! External engine discovery and invocation.

mod ffmpeg;
mod locate;

pub use ffmpeg::FfmpegInvoker;
pub use locate::locate_engine;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// One fully-resolved engine invocation.
#[derive(Debug, Clone)]
pub struct InvocationSpec {
    /// Resolved path to the engine binary.
    pub engine_path: PathBuf,
    /// Audio file to read.
    pub input_path: PathBuf,
    /// Rendered filter expression.
    pub filter_chain: String,
    /// Destination file (overwritten if present).
    pub output_path: PathBuf,
}

/// Exit code and wall-clock duration of a finished invocation.
#[derive(Debug, Clone, Copy)]
pub struct InvocationOutcome {
    /// Process exit code (-1 if killed by a signal).
    pub exit_code: i32,
    /// Time spent blocked on the engine.
    pub duration: Duration,
}

/// Narrow seam over the external engine.
///
/// The pipeline only needs "run this and tell me exit code + elapsed",
/// so tests can substitute a fake instead of spawning real processes.
pub trait EngineInvoker {
    fn invoke(&self, spec: &InvocationSpec) -> io::Result<InvocationOutcome>;
}
