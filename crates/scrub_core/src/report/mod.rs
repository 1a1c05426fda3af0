//! Run reporting: fixed-shape records appended to a cumulative log file.
//!
//! The report file is the durable history of every executed run. Records
//! are only ever appended; the file is never truncated or rewritten. A
//! record's text is a deterministic function of its request and result,
//! so re-deriving it from the same inputs reproduces it byte for byte.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::{RunRequest, RunResult};

/// Width of the rule line separating records.
const RULE_WIDTH: usize = 60;

/// Rendered in place of a size when the file does not exist.
const SIZE_SENTINEL: &str = "not available";

/// Appends run records to the cleaning log.
pub struct RunReporter {
    log_path: PathBuf,
}

impl RunReporter {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    /// Get the report file path.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Render the record for one completed run.
    pub fn render_entry(request: &RunRequest, result: &RunResult) -> String {
        let mut entry = String::new();
        entry.push_str(&"=".repeat(RULE_WIDTH));
        entry.push('\n');
        entry.push_str(&format!(
            "{:<10} {}\n",
            "Date:",
            request.started_at.format("%Y-%m-%d %H:%M")
        ));
        entry.push_str(&format!(
            "{:<10} {} (exit code {})\n",
            "Status:",
            result.status.label(),
            result.exit_code
        ));
        entry.push_str(&format!("{:<10} {}\n", "Mode:", request.mode.label()));
        entry.push_str(&format!(
            "{:<10} {}\n",
            "Duration:",
            format_duration(result.duration)
        ));
        entry.push_str(&format!(
            "{:<10} {} ({})\n",
            "Input:",
            request.input_path.display(),
            format_size(Some(result.input_size_bytes))
        ));
        entry.push_str(&format!(
            "{:<10} {} ({})\n",
            "Output:",
            request.output_path.display(),
            format_size(result.output_size_bytes)
        ));
        entry.push_str(&format!("{:<10} {}\n", "Filters:", request.filter_chain));
        entry.push('\n');
        entry
    }

    /// Append one record.
    ///
    /// Creates the file (and its parent directory) on first use, never
    /// truncates.
    pub fn append(&self, request: &RunRequest, result: &RunResult) -> io::Result<()> {
        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let entry = Self::render_entry(request, result);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        file.write_all(entry.as_bytes())?;
        Ok(())
    }
}

/// Format a duration as `mm:ss.hh` (minutes may exceed 59).
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let hundredths = (total_ms % 1_000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}

/// Format a byte count as MiB with two decimals, or the sentinel.
pub fn format_size(bytes: Option<u64>) -> String {
    match bytes {
        Some(b) => format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0)),
        None => SIZE_SENTINEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessingMode, RunStatus};
    use chrono::{Local, TimeZone};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample_request() -> RunRequest {
        RunRequest {
            input_path: PathBuf::from("/audio/speech.wav"),
            mode: ProcessingMode::Raw,
            filter_chain: "adeclip,loudnorm=I=-12:TP=-1.5".to_string(),
            output_path: PathBuf::from("/audio/speech_Cleaned_2026-08-30_14-05.wav"),
            started_at: Local.with_ymd_and_hms(2026, 8, 30, 14, 5, 0).unwrap(),
        }
    }

    fn sample_result() -> RunResult {
        RunResult {
            exit_code: 0,
            duration: Duration::from_millis(83_450),
            input_size_bytes: 12_939_428,
            output_size_bytes: Some(11_556_864),
            status: RunStatus::Success,
        }
    }

    fn sample_failed_result() -> RunResult {
        RunResult {
            exit_code: 2,
            duration: Duration::from_millis(1_200),
            input_size_bytes: 1_048_576,
            output_size_bytes: None,
            status: RunStatus::Failed,
        }
    }

    #[test]
    fn entry_has_fixed_shape() {
        let entry = RunReporter::render_entry(&sample_request(), &sample_result());
        assert!(entry.starts_with(&"=".repeat(60)));
        assert!(entry.contains("Date:      2026-08-30 14:05"));
        assert!(entry.contains("Status:    SUCCESS (exit code 0)"));
        assert!(entry.contains("Mode:      Raw recording"));
        assert!(entry.contains("Duration:  01:23.45"));
        assert!(entry.contains("Input:     /audio/speech.wav (12.34 MiB)"));
        assert!(entry.contains("Filters:   adeclip,loudnorm=I=-12:TP=-1.5"));
    }

    #[test]
    fn entry_is_deterministic() {
        let request = sample_request();
        let result = sample_result();
        assert_eq!(
            RunReporter::render_entry(&request, &result),
            RunReporter::render_entry(&request, &result)
        );
    }

    #[test]
    fn missing_output_renders_sentinel() {
        let entry = RunReporter::render_entry(&sample_request(), &sample_failed_result());
        assert!(entry.contains("Status:    FAILED (exit code 2)"));
        assert!(entry.contains("(not available)"));
    }

    #[test]
    fn append_grows_file_without_truncating() {
        let dir = tempdir().unwrap();
        let reporter = RunReporter::new(dir.path().join("cleaning_log.txt"));

        reporter.append(&sample_request(), &sample_result()).unwrap();
        let after_one = fs::read_to_string(reporter.log_path()).unwrap();

        reporter
            .append(&sample_request(), &sample_failed_result())
            .unwrap();
        let after_two = fs::read_to_string(reporter.log_path()).unwrap();

        assert!(after_two.starts_with(&after_one));
        assert_eq!(after_two.matches("Date:").count(), 2);
    }

    #[test]
    fn append_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let reporter = RunReporter::new(dir.path().join("logs/cleaning_log.txt"));
        reporter.append(&sample_request(), &sample_result()).unwrap();
        assert!(reporter.log_path().exists());
    }

    #[test]
    fn duration_formats_as_minutes_seconds_hundredths() {
        assert_eq!(format_duration(Duration::from_millis(0)), "00:00.00");
        assert_eq!(format_duration(Duration::from_millis(83_450)), "01:23.45");
        assert_eq!(format_duration(Duration::from_millis(3_725_990)), "62:05.99");
    }

    #[test]
    fn size_formats_as_mib() {
        assert_eq!(format_size(Some(1_048_576)), "1.00 MiB");
        assert_eq!(format_size(Some(12_939_428)), "12.34 MiB");
        assert_eq!(format_size(None), "not available");
    }
}
