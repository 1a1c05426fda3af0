//! audioscrub - command-line front end for the cleaning pipeline.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scrub_core::config::ConfigManager;
use scrub_core::engine::FfmpegInvoker;
use scrub_core::models::{ProcessingMode, RunStatus};
use scrub_core::naming::SystemClock;
use scrub_core::orchestrator;
use scrub_core::report::{format_duration, format_size};

/// Clean up a single audio recording with a fixed ffmpeg filter chain.
#[derive(Parser, Debug)]
#[command(name = "audioscrub", version, about)]
struct Cli {
    /// Audio file to clean.
    input: PathBuf,

    /// Mode token: "1" for a raw recording, anything else for a
    /// Zoom/Teams call (the default). Prompted for interactively when
    /// omitted.
    #[arg(long)]
    mode: Option<String>,

    /// Path to the configuration file.
    #[arg(long, default_value = "audioscrub.toml")]
    config: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = ConfigManager::new(&cli.config);
    config
        .load_or_create()
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    init_tracing(&config.settings().logging.level);

    let mode = select_mode(cli.mode.as_deref());
    tracing::info!("Mode: {}", mode);

    let report = orchestrator::run(
        config.settings(),
        &cli.input,
        mode,
        &FfmpegInvoker::new(),
        &SystemClock,
    )?;

    let result = &report.result;
    match result.status {
        RunStatus::Success => {
            println!(
                "Done in {} - wrote {} ({})",
                format_duration(result.duration),
                report.request.output_path.display(),
                format_size(result.output_size_bytes)
            );
            Ok(ExitCode::SUCCESS)
        }
        RunStatus::Failed => {
            eprintln!(
                "Cleaning failed (engine exit code {}). See the engine output above for details.",
                result.exit_code
            );
            Ok(ExitCode::from(2))
        }
    }
}

/// Resolve the processing mode from the flag or an interactive prompt.
///
/// Every path ends in a valid mode: unknown tokens and unreadable input
/// select the Zoom/Teams default.
fn select_mode(flag: Option<&str>) -> ProcessingMode {
    match flag {
        Some(token) => ProcessingMode::from_token(token),
        None => prompt_for_mode().unwrap_or_default(),
    }
}

/// Ask for one token on stdin when it is a terminal.
fn prompt_for_mode() -> Option<ProcessingMode> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return None;
    }

    print!("Select mode [1 = raw recording, anything else = Zoom/Teams]: ");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    stdin.lock().read_line(&mut line).ok()?;
    Some(ProcessingMode::from_token(&line))
}

/// Initialize the global tracing subscriber.
///
/// RUST_LOG overrides the configured default level.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_token_maps_to_mode() {
        assert_eq!(select_mode(Some("1")), ProcessingMode::Raw);
        assert_eq!(select_mode(Some("2")), ProcessingMode::ZoomTeams);
        assert_eq!(select_mode(Some("")), ProcessingMode::ZoomTeams);
    }

    #[test]
    fn cli_parses_minimal_invocation() {
        let cli = Cli::parse_from(["audioscrub", "speech.wav"]);
        assert_eq!(cli.input, PathBuf::from("speech.wav"));
        assert!(cli.mode.is_none());
        assert_eq!(cli.config, PathBuf::from("audioscrub.toml"));
    }

    #[test]
    fn cli_parses_mode_flag() {
        let cli = Cli::parse_from(["audioscrub", "speech.wav", "--mode", "1"]);
        assert_eq!(cli.mode.as_deref(), Some("1"));
    }
}
