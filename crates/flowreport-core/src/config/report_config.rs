//! Serializer configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::traits::LineNumberSettings;

/// Configuration for writing result documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Emit `linenumber` on sources and sinks when known. Default: false.
    pub enable_line_numbers: Option<bool>,
    /// Emit the propagation path under each source. Default: true.
    pub serialize_taint_path: Option<bool>,
    /// Order sinks by statement text, then category. Default: true.
    pub sort_results: Option<bool>,
    /// Spaces per nesting level. 0 writes everything on one line. Default: 2.
    pub indent: Option<usize>,
}

/// Name of the table holding report settings in a shared config file.
const REPORT_TABLE: &str = "report";

impl ReportConfig {
    /// Parse from TOML, accepting either top-level keys or a `[report]` table.
    /// Missing fields fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut table: toml::Table = toml::from_str(toml_str)?;
        let value = match table.remove(REPORT_TABLE) {
            Some(section) => section,
            None => toml::Value::Table(table),
        };
        Ok(value.try_into::<ReportConfig>()?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded report config");
        Ok(config)
    }

    pub fn effective_line_numbers(&self) -> bool {
        self.enable_line_numbers.unwrap_or(false)
    }

    pub fn effective_serialize_taint_path(&self) -> bool {
        self.serialize_taint_path.unwrap_or(true)
    }

    pub fn effective_sort_results(&self) -> bool {
        self.sort_results.unwrap_or(true)
    }

    pub fn effective_indent(&self) -> usize {
        self.indent.unwrap_or(2)
    }
}

impl LineNumberSettings for ReportConfig {
    fn line_numbers_enabled(&self) -> bool {
        self.effective_line_numbers()
    }
}
