//! Outcome classification of the analysis run that produced a result set.

use serde::{Deserialize, Serialize};

/// How the analysis run terminated.
///
/// Integer codes match the flag values the analysis engine reports.
/// Any other code, including combinations of flags, is kept as
/// `Unknown(code)` so the mapping from integers stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum TerminationState {
    #[default]
    Success,
    DataFlowTimeout,
    DataFlowOutOfMemory,
    PathReconstructionTimeout,
    PathReconstructionOutOfMemory,
    Unknown(i32),
}

impl TerminationState {
    pub const SUCCESS_CODE: i32 = 0;
    pub const DATA_FLOW_TIMEOUT_CODE: i32 = 1;
    pub const DATA_FLOW_OOM_CODE: i32 = 2;
    pub const PATH_RECONSTRUCTION_TIMEOUT_CODE: i32 = 4;
    pub const PATH_RECONSTRUCTION_OOM_CODE: i32 = 8;

    pub fn from_code(code: i32) -> Self {
        match code {
            Self::SUCCESS_CODE => Self::Success,
            Self::DATA_FLOW_TIMEOUT_CODE => Self::DataFlowTimeout,
            Self::DATA_FLOW_OOM_CODE => Self::DataFlowOutOfMemory,
            Self::PATH_RECONSTRUCTION_TIMEOUT_CODE => Self::PathReconstructionTimeout,
            Self::PATH_RECONSTRUCTION_OOM_CODE => Self::PathReconstructionOutOfMemory,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Success => Self::SUCCESS_CODE,
            Self::DataFlowTimeout => Self::DATA_FLOW_TIMEOUT_CODE,
            Self::DataFlowOutOfMemory => Self::DATA_FLOW_OOM_CODE,
            Self::PathReconstructionTimeout => Self::PATH_RECONSTRUCTION_TIMEOUT_CODE,
            Self::PathReconstructionOutOfMemory => Self::PATH_RECONSTRUCTION_OOM_CODE,
            Self::Unknown(code) => *code,
        }
    }

    /// The token written to the document root. Downstream consumers key on
    /// these strings, so they must not change between format versions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::DataFlowTimeout => "DataFlowTimeout",
            Self::DataFlowOutOfMemory => "DataFlowOutOfMemory",
            Self::PathReconstructionTimeout => "PathReconstructionTimeout",
            Self::PathReconstructionOutOfMemory => "PathReconstructionOutOfMemory",
            Self::Unknown(_) => "Unknown",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<i32> for TerminationState {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<TerminationState> for i32 {
    fn from(state: TerminationState) -> Self {
        state.code()
    }
}

impl std::fmt::Display for TerminationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
