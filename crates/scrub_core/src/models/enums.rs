//! Core enums used throughout the pipeline.

use serde::{Deserialize, Serialize};

/// Processing profile for a run.
///
/// Controls whether the cleaning filter group runs before leveling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    /// Full repair and denoise pass for raw microphone recordings.
    Raw,
    /// Leveling only, for audio that already went through VoIP processing.
    #[default]
    ZoomTeams,
}

impl ProcessingMode {
    /// Map a user-entered token to a mode.
    ///
    /// `"1"` selects Raw. Every other token, including an empty one,
    /// selects ZoomTeams. Unknown input is deliberately not an error:
    /// the lighter pipeline is the safe choice for VoIP audio.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "1" => Self::Raw,
            _ => Self::ZoomTeams,
        }
    }

    /// Display label used in run reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Raw => "Raw recording",
            Self::ZoomTeams => "Zoom/Teams call",
        }
    }
}

impl std::fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classification of a completed engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Engine exited with code 0.
    Success,
    /// Engine exited with any other code.
    Failed,
}

impl RunStatus {
    /// Classify an engine exit code.
    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            Self::Success
        } else {
            Self::Failed
        }
    }

    /// Uppercase label used in run reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
