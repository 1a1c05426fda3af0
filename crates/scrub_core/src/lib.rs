//! Scrub Core - pipeline logic for audioscrub
//!
//! This crate contains all orchestration logic with zero CLI dependencies:
//! - Configuration management
//! - Models (modes, run requests and results)
//! - Filter-chain assembly
//! - Engine discovery and invocation
//! - Output naming
//! - Run reporting
//! - Pipeline orchestration

pub mod chain;
pub mod config;
pub mod engine;
pub mod models;
pub mod naming;
pub mod orchestrator;
pub mod preflight;
pub mod report;

pub use models::{ProcessingMode, RunRequest, RunResult, RunStatus};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
