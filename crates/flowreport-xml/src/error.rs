//! Serialization errors. All of them abort the write; none are retried.

use std::path::PathBuf;

use flowreport_core::errors::error_code::{self, ErrorCode};
use flowreport_core::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("Cannot open destination {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML stream error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid analysis result: {0}")]
    Model(#[from] ModelError),
}

impl ErrorCode for SerializeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Open { .. } | Self::Io(_) => error_code::IO_ERROR,
            Self::Xml(_) | Self::Utf8(_) => error_code::XML_ERROR,
            Self::Model(e) => e.error_code(),
        }
    }
}

pub type SerializeResult<T> = Result<T, SerializeError>;
