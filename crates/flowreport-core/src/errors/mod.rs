//! Error types shared across the workspace.
//! Each enum maps to a stable machine-readable code via [`ErrorCode`].

pub mod config_error;
pub mod error_code;
pub mod model_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use model_error::ModelError;
