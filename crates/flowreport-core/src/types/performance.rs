//! Aggregate performance measurements of an analysis run.

use serde::{Deserialize, Serialize};

/// The fixed catalogue of metrics, declared in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    CallgraphSeconds,
    TaintPropagationSeconds,
    PathReconstructionSeconds,
    TotalRuntimeSeconds,
    MaxMemoryConsumption,
    SourceCount,
    SinkCount,
}

impl Metric {
    /// Every metric in the order it is written out.
    pub const ALL: [Metric; 7] = [
        Metric::CallgraphSeconds,
        Metric::TaintPropagationSeconds,
        Metric::PathReconstructionSeconds,
        Metric::TotalRuntimeSeconds,
        Metric::MaxMemoryConsumption,
        Metric::SourceCount,
        Metric::SinkCount,
    ];

    /// Stable name token used in the `name` attribute of a performance entry.
    pub fn token(&self) -> &'static str {
        match self {
            Self::CallgraphSeconds => "CallgraphConstructionSeconds",
            Self::TaintPropagationSeconds => "TaintPropagationSeconds",
            Self::PathReconstructionSeconds => "PathReconstructionSeconds",
            Self::TotalRuntimeSeconds => "TotalRuntimeSeconds",
            Self::MaxMemoryConsumption => "MaxMemoryConsumption",
            Self::SourceCount => "SourceCount",
            Self::SinkCount => "SinkCount",
        }
    }
}

/// Performance data of one analysis run.
///
/// A value `<= 0` means the metric was not measured. Such values never
/// reach the output, which also means a metric measured as exactly zero is
/// indistinguishable from an unmeasured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceData {
    pub callgraph_construction_seconds: i64,
    pub taint_propagation_seconds: i64,
    pub path_reconstruction_seconds: i64,
    pub total_runtime_seconds: i64,
    pub max_memory_consumption: i64,
    pub source_count: i64,
    pub sink_count: i64,
}

impl PerformanceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: Metric) -> i64 {
        match metric {
            Metric::CallgraphSeconds => self.callgraph_construction_seconds,
            Metric::TaintPropagationSeconds => self.taint_propagation_seconds,
            Metric::PathReconstructionSeconds => self.path_reconstruction_seconds,
            Metric::TotalRuntimeSeconds => self.total_runtime_seconds,
            Metric::MaxMemoryConsumption => self.max_memory_consumption,
            Metric::SourceCount => self.source_count,
            Metric::SinkCount => self.sink_count,
        }
    }

    pub fn set(&mut self, metric: Metric, value: i64) {
        let slot = match metric {
            Metric::CallgraphSeconds => &mut self.callgraph_construction_seconds,
            Metric::TaintPropagationSeconds => &mut self.taint_propagation_seconds,
            Metric::PathReconstructionSeconds => &mut self.path_reconstruction_seconds,
            Metric::TotalRuntimeSeconds => &mut self.total_runtime_seconds,
            Metric::MaxMemoryConsumption => &mut self.max_memory_consumption,
            Metric::SourceCount => &mut self.source_count,
            Metric::SinkCount => &mut self.sink_count,
        };
        *slot = value;
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, metric: Metric, value: i64) -> Self {
        self.set(metric, value);
        self
    }

    /// Measured metrics (value > 0) in fixed document order.
    pub fn measured(&self) -> impl Iterator<Item = (Metric, i64)> + '_ {
        Metric::ALL
            .iter()
            .map(move |m| (*m, self.get(*m)))
            .filter(|(_, value)| *value > 0)
    }

    /// True when no metric carries a measurement.
    pub fn is_empty(&self) -> bool {
        self.measured().next().is_none()
    }
}
