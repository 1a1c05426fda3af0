//! ffmpeg invocation: argument assembly and synchronous execution.

use std::ffi::OsString;
use std::io;
use std::process::{Command, Stdio};
use std::time::Instant;

use super::{EngineInvoker, InvocationOutcome, InvocationSpec};

/// Production invoker that spawns ffmpeg and blocks until it exits.
///
/// The engine's own stdout/stderr are inherited unmodified so the
/// operator sees codec and corruption diagnostics exactly as ffmpeg
/// prints them. No timeout, no retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegInvoker;

impl FfmpegInvoker {
    pub fn new() -> Self {
        Self
    }

    /// Build the argument list for one invocation.
    ///
    /// `-vn` strips any video streams, `-y` overwrites an existing
    /// destination, `-hide_banner -loglevel error -stats` cuts output
    /// down to progress stats and real diagnostics.
    fn build_args(spec: &InvocationSpec) -> Vec<OsString> {
        vec![
            OsString::from("-hide_banner"),
            OsString::from("-loglevel"),
            OsString::from("error"),
            OsString::from("-stats"),
            OsString::from("-i"),
            spec.input_path.as_os_str().to_os_string(),
            OsString::from("-vn"),
            OsString::from("-af"),
            OsString::from(&spec.filter_chain),
            OsString::from("-y"),
            spec.output_path.as_os_str().to_os_string(),
        ]
    }
}

impl EngineInvoker for FfmpegInvoker {
    fn invoke(&self, spec: &InvocationSpec) -> io::Result<InvocationOutcome> {
        let args = Self::build_args(spec);
        tracing::debug!(
            "Spawning engine: {} {:?}",
            spec.engine_path.display(),
            args
        );

        let start = Instant::now();
        let status = Command::new(&spec.engine_path)
            .args(&args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        let duration = start.elapsed();

        let exit_code = status.code().unwrap_or(-1);
        Ok(InvocationOutcome {
            exit_code,
            duration,
        })
    }
}
