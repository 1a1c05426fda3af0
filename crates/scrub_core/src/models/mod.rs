//! Data model for a single cleaning run.

mod enums;
mod run;

pub use enums::{ProcessingMode, RunStatus};
pub use run::{RunRequest, RunResult};
