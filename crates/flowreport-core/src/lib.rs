//! # flowreport-core
//!
//! Foundation crate for flowreport.
//! Defines the taint-flow result model, termination states, performance
//! metrics, collaborator traits, config, errors and tracing setup.
//! The document writer in `flowreport-xml` depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ReportConfig;
pub use errors::{ConfigError, ErrorCode, ModelError};
pub use traits::{AttributeExtension, ExtraAttributes, LineNumberSettings, MethodResolver, NoExtension};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::{
    AccessPath, AccessPathFragment, AnalysisResult, Definition, DefinitionOrigin, Metric,
    PerformanceData, SinkRecord, SourceRecord, Statement, TaintPath, TerminationState,
};
