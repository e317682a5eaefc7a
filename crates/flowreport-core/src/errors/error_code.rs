//! Stable error codes for callers that branch on failure kind.

/// Implemented by every error enum in the workspace.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const IO_ERROR: &str = "IO_ERROR";
pub const XML_ERROR: &str = "XML_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const TAINT_PATH_MISMATCH: &str = "TAINT_PATH_MISMATCH";
