//! Output path resolution.
//!
//! Cleaned files never replace their input: the output name is derived
//! from the input stem plus a minute-granularity timestamp, always with
//! the lossless `.wav` extension. Two runs on the same input within the
//! same minute resolve to the same path and the engine's overwrite flag
//! clobbers the earlier output; the clock is injectable so that behavior
//! is pinned by tests instead of left accidental.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Timestamp format embedded in output names. Minute granularity.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M";

/// Time source for output naming and report timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Resolve the output path for a cleaned file.
///
/// `output_dir/{stem}_Cleaned_{timestamp}.wav`
pub fn resolve_output_path(
    input_path: &Path,
    output_dir: &Path,
    timestamp: DateTime<Local>,
) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".to_string());
    let file_name = format!(
        "{}_Cleaned_{}.wav",
        stem,
        timestamp.format(TIMESTAMP_FORMAT)
    );
    output_dir.join(file_name)
}
