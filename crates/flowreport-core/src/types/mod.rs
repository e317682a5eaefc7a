//! Result data model produced by the analysis engine.
//! Everything here is read-only input to the document writer.

pub mod access_path;
pub mod collections;
pub mod performance;
pub mod records;
pub mod results;
pub mod termination;

pub use access_path::{AccessPath, AccessPathFragment};
pub use performance::{Metric, PerformanceData};
pub use records::{Definition, DefinitionOrigin, SinkRecord, SourceRecord, Statement, TaintPath};
pub use results::{AnalysisResult, ResultEntry};
pub use termination::TerminationState;
