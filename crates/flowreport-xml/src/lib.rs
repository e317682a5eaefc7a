//! # flowreport-xml
//!
//! Writes taint-flow analysis results as a versioned, self-describing XML
//! document. The walk is strictly forward: document writer, then one
//! source/sink encoding per sink, then the access-path codec per node.

pub mod access_path;
pub mod constants;
pub mod error;
pub mod performance;
pub mod source_sink;
pub mod writer;

pub use constants::FILE_FORMAT_VERSION;
pub use error::{SerializeError, SerializeResult};
pub use source_sink::SourceSinkEncoder;
pub use writer::ResultsSerializer;
