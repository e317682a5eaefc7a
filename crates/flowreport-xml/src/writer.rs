//! Document writer: the top-level entry point for serializing a result set.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flowreport_core::traits::{AttributeExtension, MethodResolver, NoExtension};
use flowreport_core::{AnalysisResult, ReportConfig};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::constants::{attributes, tags, FILE_FORMAT_VERSION};
use crate::error::{SerializeError, SerializeResult};
use crate::performance::write_performance_entries;
use crate::source_sink::SourceSinkEncoder;

/// Serializes [`AnalysisResult`]s into versioned XML documents.
///
/// The document is produced in a single forward pass. Any failure aborts the
/// whole write; a file destination may be left partially written and should
/// be discarded by the caller.
pub struct ResultsSerializer<'a> {
    config: ReportConfig,
    resolver: Option<Box<dyn MethodResolver + 'a>>,
    extension: Box<dyn AttributeExtension + 'a>,
}

impl<'a> ResultsSerializer<'a> {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            resolver: None,
            extension: Box::new(NoExtension),
        }
    }

    /// Enables the `Method` attribute by resolving each statement to the
    /// method containing it.
    pub fn with_method_resolver(mut self, resolver: impl MethodResolver + 'a) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Installs hooks that append extra attributes to sink and source nodes.
    pub fn with_extension(mut self, extension: impl AttributeExtension + 'a) -> Self {
        self.extension = Box::new(extension);
        self
    }

    /// Whether taint propagation paths are written under each source.
    pub fn serialize_taint_path(mut self, serialize: bool) -> Self {
        self.set_serialize_taint_path(serialize);
        self
    }

    pub fn set_serialize_taint_path(&mut self, serialize: bool) {
        self.config.serialize_taint_path = Some(serialize);
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Writes the document to a file, creating or truncating it.
    pub fn serialize(&self, result: &AnalysisResult, path: impl AsRef<Path>) -> SerializeResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SerializeError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.serialize_to_writer(result, BufWriter::new(file))?;
        tracing::debug!(path = %path.display(), "closed results destination");
        Ok(())
    }

    /// Writes the document to `out`, flushes it and hands it back.
    pub fn serialize_to_writer<W: Write>(&self, result: &AnalysisResult, out: W) -> SerializeResult<W> {
        tracing::info!(
            version = FILE_FORMAT_VERSION,
            flows = result.len(),
            termination_state = %result.termination_state(),
            "serializing data flow results"
        );

        let mut writer = match self.config.effective_indent() {
            0 => Writer::new(out),
            indent => Writer::new_with_indent(out, b' ', indent),
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new(tags::ROOT);
        root.push_attribute((
            attributes::FILE_FORMAT_VERSION,
            FILE_FORMAT_VERSION.to_string().as_str(),
        ));
        root.push_attribute((attributes::TERMINATION_STATE, result.termination_state().as_str()));
        writer.write_event(Event::Start(root))?;

        if !result.is_empty() {
            writer.write_event(Event::Start(BytesStart::new(tags::RESULTS)))?;
            self.write_data_flows(&mut writer, result)?;
            writer.write_event(Event::End(BytesEnd::new(tags::RESULTS)))?;
        }

        if let Some(performance_data) = result.performance_data().filter(|p| !p.is_empty()) {
            writer.write_event(Event::Start(BytesStart::new(tags::PERFORMANCE_DATA)))?;
            write_performance_entries(&mut writer, performance_data)?;
            writer.write_event(Event::End(BytesEnd::new(tags::PERFORMANCE_DATA)))?;
        }

        writer.write_event(Event::End(BytesEnd::new(tags::ROOT)))?;

        let mut out = writer.into_inner();
        out.flush()?;
        tracing::info!(flows = result.len(), "finished data flow results document");
        Ok(out)
    }

    /// Renders the document into a string.
    pub fn serialize_to_string(&self, result: &AnalysisResult) -> SerializeResult<String> {
        let bytes = self.serialize_to_writer(result, Vec::new())?;
        Ok(String::from_utf8(bytes)?)
    }

    fn write_data_flows<W: Write>(&self, writer: &mut Writer<W>, result: &AnalysisResult) -> SerializeResult<()> {
        let encoder = SourceSinkEncoder::new(
            &self.config,
            self.resolver.as_deref(),
            &*self.extension,
            self.config.effective_serialize_taint_path(),
        );

        let flows = if self.config.effective_sort_results() {
            result.sorted_results()
        } else {
            result.iter().collect()
        };

        for (sink, sources) in flows {
            if sources.is_empty() {
                tracing::debug!(sink = %sink.statement.text, "skipping sink without sources");
                continue;
            }
            tracing::debug!(sink = %sink.statement.text, sources = sources.len(), "writing result");
            encoder.write_result(writer, sink, sources)?;
        }
        Ok(())
    }
}

impl Default for ResultsSerializer<'_> {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}
