//! The complete output of one analysis run.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::access_path::AccessPath;
use super::collections::FxHashMap;
use super::performance::PerformanceData;
use super::records::{DefinitionOrigin, SinkRecord, SourceRecord};
use super::termination::TerminationState;

/// One sink and every source that reaches it. This is also the JSON shape
/// of an [`AnalysisResult`], since struct keys do not fit a JSON map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub sink: SinkRecord,
    pub sources: Vec<SourceRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawAnalysisResult {
    results: Vec<ResultEntry>,
    performance_data: Option<PerformanceData>,
    termination_state: TerminationState,
}

/// Sink → sources mapping plus run-level metadata.
///
/// Iteration order over sinks is whatever the underlying map exposes. Use
/// [`sorted_results`](Self::sorted_results) when output must be reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAnalysisResult", into = "RawAnalysisResult")]
pub struct AnalysisResult {
    results: FxHashMap<SinkRecord, Vec<SourceRecord>>,
    performance_data: Option<PerformanceData>,
    termination_state: TerminationState,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `source` reaches `sink`. Sources keep insertion order.
    pub fn add_result(&mut self, sink: SinkRecord, source: SourceRecord) {
        self.results.entry(sink).or_default().push(source);
    }

    pub fn add_sources(&mut self, sink: SinkRecord, sources: impl IntoIterator<Item = SourceRecord>) {
        self.results.entry(sink).or_default().extend(sources);
    }

    /// True unless at least one sink has at least one source.
    pub fn is_empty(&self) -> bool {
        self.results.values().all(|sources| sources.is_empty())
    }

    /// Number of sink/source pairs.
    pub fn len(&self) -> usize {
        self.results.values().map(Vec::len).sum()
    }

    pub fn sink_count(&self) -> usize {
        self.results.len()
    }

    pub fn sources_for(&self, sink: &SinkRecord) -> Option<&[SourceRecord]> {
        self.results.get(sink).map(Vec::as_slice)
    }

    /// Sinks with their sources, in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&SinkRecord, &[SourceRecord])> {
        self.results.iter().map(|(sink, sources)| (sink, sources.as_slice()))
    }

    /// Sinks with their sources, ordered by statement text, then category,
    /// then line number, then access path and definition origin. Sources
    /// under a sink keep their recorded order.
    pub fn sorted_results(&self) -> Vec<(&SinkRecord, &[SourceRecord])> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| compare_sinks(a, b));
        entries
    }

    pub fn performance_data(&self) -> Option<&PerformanceData> {
        self.performance_data.as_ref()
    }

    pub fn set_performance_data(&mut self, performance_data: PerformanceData) {
        self.performance_data = Some(performance_data);
    }

    pub fn termination_state(&self) -> TerminationState {
        self.termination_state
    }

    pub fn set_termination_state(&mut self, state: TerminationState) {
        self.termination_state = state;
    }
}

fn compare_sinks(a: &SinkRecord, b: &SinkRecord) -> Ordering {
    a.statement
        .text
        .cmp(&b.statement.text)
        .then_with(|| a.definition.category.cmp(&b.definition.category))
        .then_with(|| a.statement.line_number.cmp(&b.statement.line_number))
        .then_with(|| compare_access_paths(&a.access_path, &b.access_path))
        .then_with(|| compare_origins(&a.definition.origin, &b.definition.origin))
}

fn compare_access_paths(a: &AccessPath, b: &AccessPath) -> Ordering {
    a.plain_value
        .cmp(&b.plain_value)
        .then_with(|| a.base_type.cmp(&b.base_type))
        .then_with(|| a.taint_sub_fields.cmp(&b.taint_sub_fields))
        .then_with(|| a.fragments.as_slice().cmp(b.fragments.as_slice()))
}

fn compare_origins(a: &DefinitionOrigin, b: &DefinitionOrigin) -> Ordering {
    fn key(origin: &DefinitionOrigin) -> (u8, Option<&str>) {
        match origin {
            DefinitionOrigin::Method { signature } => (0, signature.as_deref()),
            DefinitionOrigin::Field { signature } => (1, Some(signature.as_str())),
            DefinitionOrigin::Statement => (2, None),
            DefinitionOrigin::Unspecified => (3, None),
        }
    }
    key(a).cmp(&key(b))
}

impl From<RawAnalysisResult> for AnalysisResult {
    fn from(raw: RawAnalysisResult) -> Self {
        let mut result = AnalysisResult {
            results: FxHashMap::default(),
            performance_data: raw.performance_data,
            termination_state: raw.termination_state,
        };
        for entry in raw.results {
            result.add_sources(entry.sink, entry.sources);
        }
        result
    }
}

impl From<AnalysisResult> for RawAnalysisResult {
    fn from(result: AnalysisResult) -> Self {
        let results = result
            .sorted_results()
            .into_iter()
            .map(|(sink, sources)| ResultEntry {
                sink: sink.clone(),
                sources: sources.to_vec(),
            })
            .collect();
        RawAnalysisResult {
            results,
            performance_data: result.performance_data,
            termination_state: result.termination_state,
        }
    }
}
