//! Tag, attribute and value tokens of the result document format.
//!
//! These names are part of the format contract. Renaming any of them, or
//! changing what is emitted when, requires bumping [`FILE_FORMAT_VERSION`].

/// Schema version written to the root element.
pub const FILE_FORMAT_VERSION: u32 = 102;

pub mod tags {
    pub const ROOT: &str = "DataFlowResults";
    pub const RESULTS: &str = "Results";
    pub const RESULT: &str = "Result";
    pub const SINK: &str = "Sink";
    pub const SOURCES: &str = "Sources";
    pub const SOURCE: &str = "Source";
    pub const ACCESS_PATH: &str = "AccessPath";
    pub const FIELDS: &str = "Fields";
    pub const FIELD: &str = "Field";
    pub const TAINT_PATH: &str = "TaintPath";
    pub const PATH_ELEMENT: &str = "PathElement";
    pub const PERFORMANCE_DATA: &str = "PerformanceData";
    pub const PERFORMANCE_ENTRY: &str = "PerformanceEntry";
}

pub mod attributes {
    pub const FILE_FORMAT_VERSION: &str = "FileFormatVersion";
    pub const TERMINATION_STATE: &str = "TerminationState";
    pub const STATEMENT: &str = "Statement";
    pub const LINE_NUMBER: &str = "LineNumber";
    pub const CATEGORY: &str = "Category";
    pub const METHOD: &str = "Method";
    pub const METHOD_SOURCE_SINK_DEFINITION: &str = "MethodSourceSinkDefinition";
    pub const VALUE: &str = "Value";
    pub const TYPE: &str = "Type";
    pub const TAINT_SUB_FIELDS: &str = "TaintSubFields";
    pub const NAME: &str = "Name";

    /// Standard attributes of `Sink` and `Source` nodes. Extensions may not
    /// reuse these names.
    pub const SOURCE_SINK_RESERVED: &[&str] = &[
        STATEMENT,
        LINE_NUMBER,
        CATEGORY,
        METHOD,
        METHOD_SOURCE_SINK_DEFINITION,
    ];
}

pub mod values {
    pub const TRUE: &str = "true";
    pub const FALSE: &str = "false";

    pub fn bool_token(value: bool) -> &'static str {
        if value {
            TRUE
        } else {
            FALSE
        }
    }
}
