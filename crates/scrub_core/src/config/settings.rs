//! Settings struct with TOML-based sections.
//!
//! Every field is serde-defaulted so a partial or empty config file
//! still loads.

use serde::{Deserialize, Serialize};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// External engine settings.
    #[serde(default)]
    pub engine: EngineSettings,

    /// Diagnostic logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paths: PathSettings::default(),
            engine: EngineSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Path configuration for outputs and the run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder cleaned files are written into.
    #[serde(default = "default_output_folder")]
    pub output_folder: String,

    /// Cumulative run report file. Lives beside the outputs by default.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_output_folder() -> String {
    "cleaned".to_string()
}

fn default_log_file() -> String {
    "cleaned/cleaning_log.txt".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            output_folder: default_output_folder(),
            log_file: default_log_file(),
        }
    }
}

/// External engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Engine binary name, or an explicit path to it.
    #[serde(default = "default_engine_binary")]
    pub binary: String,
}

fn default_engine_binary() -> String {
    "ffmpeg".to_string()
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            binary: default_engine_binary(),
        }
    }
}

/// Diagnostic logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.paths.output_folder, "cleaned");
        assert_eq!(settings.engine.binary, "ffmpeg");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn empty_config_parses_to_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.paths.log_file, "cleaned/cleaning_log.txt");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[engine]\nbinary = \"/opt/ffmpeg\"\n").unwrap();
        assert_eq!(settings.engine.binary, "/opt/ffmpeg");
        assert_eq!(settings.paths.output_folder, "cleaned");
    }
}
