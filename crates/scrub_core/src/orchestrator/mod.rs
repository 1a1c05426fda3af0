//! Pipeline orchestration: preflight, invocation, classification, reporting.

pub mod errors;
mod pipeline;

pub use errors::{PipelineError, PipelineResult};
pub use pipeline::{run, RunReport};
