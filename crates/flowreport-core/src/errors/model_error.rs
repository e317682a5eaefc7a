//! Data-model precondition violations.

use super::error_code::{self, ErrorCode};

/// Raised when upstream hands over entities that break a model invariant.
/// These are never repaired, only reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error(
        "Taint path length mismatch: {statements} statements but {access_paths} access paths"
    )]
    TaintPathLengthMismatch {
        statements: usize,
        access_paths: usize,
    },
}

impl ErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TaintPathLengthMismatch { .. } => error_code::TAINT_PATH_MISMATCH,
        }
    }
}
