//! Configuration management.
//!
//! Settings are explicit values passed into the pipeline; there is no
//! process-wide mutable state.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{EngineSettings, LoggingSettings, PathSettings, Settings};
