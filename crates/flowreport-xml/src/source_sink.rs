//! Source/sink encoder: one `Result` node per sink with its `Sources`.

use std::io::Write;

use flowreport_core::traits::{AttributeExtension, ExtraAttributes, LineNumberSettings, MethodResolver};
use flowreport_core::{Definition, SinkRecord, SourceRecord, Statement, TaintPath};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::access_path::write_access_path;
use crate::constants::{attributes, tags};
use crate::error::SerializeResult;

/// Encodes sinks and their sources.
///
/// Collaborators are borrowed for the duration of one document write and
/// only ever read.
pub struct SourceSinkEncoder<'a> {
    settings: &'a dyn LineNumberSettings,
    resolver: Option<&'a dyn MethodResolver>,
    extension: &'a dyn AttributeExtension,
    serialize_taint_path: bool,
}

impl<'a> SourceSinkEncoder<'a> {
    pub fn new(
        settings: &'a dyn LineNumberSettings,
        resolver: Option<&'a dyn MethodResolver>,
        extension: &'a dyn AttributeExtension,
        serialize_taint_path: bool,
    ) -> Self {
        Self {
            settings,
            resolver,
            extension,
            serialize_taint_path,
        }
    }

    /// Writes `<Result>` holding the sink node and a `Sources` block.
    pub fn write_result<W: Write>(
        &self,
        writer: &mut Writer<W>,
        sink: &SinkRecord,
        sources: &[SourceRecord],
    ) -> SerializeResult<()> {
        writer.write_event(Event::Start(BytesStart::new(tags::RESULT)))?;
        self.write_sink(writer, sink)?;

        writer.write_event(Event::Start(BytesStart::new(tags::SOURCES)))?;
        for source in sources {
            self.write_source(writer, source)?;
        }
        writer.write_event(Event::End(BytesEnd::new(tags::SOURCES)))?;

        writer.write_event(Event::End(BytesEnd::new(tags::RESULT)))?;
        Ok(())
    }

    pub fn write_sink<W: Write>(&self, writer: &mut Writer<W>, sink: &SinkRecord) -> SerializeResult<()> {
        let mut start = self.standard_attributes(tags::SINK, &sink.statement, &sink.definition);
        let mut extra = ExtraAttributes::new(attributes::SOURCE_SINK_RESERVED);
        self.extension.sink_attributes(sink, &mut extra);
        push_extra(&mut start, extra);

        writer.write_event(Event::Start(start))?;
        write_access_path(writer, &sink.access_path)?;
        writer.write_event(Event::End(BytesEnd::new(tags::SINK)))?;
        Ok(())
    }

    pub fn write_source<W: Write>(
        &self,
        writer: &mut Writer<W>,
        source: &SourceRecord,
    ) -> SerializeResult<()> {
        let mut start = self.standard_attributes(tags::SOURCE, &source.statement, &source.definition);
        let mut extra = ExtraAttributes::new(attributes::SOURCE_SINK_RESERVED);
        self.extension.source_attributes(source, &mut extra);
        push_extra(&mut start, extra);

        writer.write_event(Event::Start(start))?;
        write_access_path(writer, &source.access_path)?;

        if self.serialize_taint_path {
            if let Some(path) = source.path.as_ref().filter(|p| !p.is_empty()) {
                self.write_taint_path(writer, path)?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new(tags::SOURCE)))?;
        Ok(())
    }

    /// Writes the `TaintPath` block, one `PathElement` per step in path
    /// order. Steps are never reordered or merged.
    fn write_taint_path<W: Write>(&self, writer: &mut Writer<W>, path: &TaintPath) -> SerializeResult<()> {
        path.validate()?;

        writer.write_event(Event::Start(BytesStart::new(tags::TAINT_PATH)))?;
        for (statement, access_path) in path.steps() {
            let mut element = BytesStart::new(tags::PATH_ELEMENT);
            element.push_attribute((attributes::STATEMENT, statement.text.as_str()));
            if let Some(method) = self.enclosing_method(statement) {
                element.push_attribute((attributes::METHOD, method.as_str()));
            }
            writer.write_event(Event::Start(element))?;
            write_access_path(writer, access_path)?;
            writer.write_event(Event::End(BytesEnd::new(tags::PATH_ELEMENT)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(tags::TAINT_PATH)))?;
        Ok(())
    }

    /// Attributes shared by sink and source nodes.
    fn standard_attributes(
        &self,
        tag: &'static str,
        statement: &Statement,
        definition: &Definition,
    ) -> BytesStart<'static> {
        let mut start = BytesStart::new(tag);
        start.push_attribute((attributes::STATEMENT, statement.text.as_str()));

        if self.settings.line_numbers_enabled() {
            match statement.line_number {
                Some(line) => start.push_attribute((attributes::LINE_NUMBER, line.to_string().as_str())),
                None => tracing::debug!(statement = %statement.text, "no line number available"),
            }
        }
        if let Some(category) = &definition.category {
            start.push_attribute((attributes::CATEGORY, category.as_str()));
        }
        if let Some(method) = self.enclosing_method(statement) {
            start.push_attribute((attributes::METHOD, method.as_str()));
        }
        if let Some(signature) = definition.method_signature() {
            start.push_attribute((attributes::METHOD_SOURCE_SINK_DEFINITION, signature));
        }
        start
    }

    fn enclosing_method(&self, statement: &Statement) -> Option<String> {
        let resolver = self.resolver?;
        let method = resolver.method_of(statement);
        if method.is_none() {
            tracing::debug!(statement = %statement.text, "statement has no resolvable enclosing method");
        }
        method
    }
}

fn push_extra(start: &mut BytesStart<'_>, extra: ExtraAttributes<'_>) {
    for (name, value) in extra.iter() {
        start.push_attribute((name, value));
    }
}

#[cfg(test)]
mod tests {
    use flowreport_core::traits::NoExtension;
    use flowreport_core::{AccessPath, DefinitionOrigin};

    use super::*;

    fn render_sink(encoder: &SourceSinkEncoder<'_>, sink: &SinkRecord) -> String {
        let mut writer = Writer::new(Vec::new());
        encoder.write_sink(&mut writer, sink).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    fn sink() -> SinkRecord {
        SinkRecord::new(
            Statement::new("s1").at_line(12),
            AccessPath::local("x", "java.lang.String"),
            Definition::method("<Log: int i(java.lang.String)>").with_category("Log"),
        )
    }

    #[test]
    fn sink_attributes_in_standard_order() {
        let resolver = |_: &Statement| Some("<Main: void run()>".to_string());
        let encoder = SourceSinkEncoder::new(&true, Some(&resolver as &dyn MethodResolver), &NoExtension, true);
        let xml = render_sink(&encoder, &sink());
        assert!(xml.starts_with(
            r#"<Sink Statement="s1" LineNumber="12" Category="Log" Method="&lt;Main: void run()&gt;" MethodSourceSinkDefinition="&lt;Log: int i(java.lang.String)&gt;">"#
        ));
    }

    #[test]
    fn optional_attributes_are_omitted() {
        let encoder = SourceSinkEncoder::new(&false, None, &NoExtension, true);
        let mut record = sink();
        record.definition = Definition {
            category: None,
            origin: DefinitionOrigin::Statement,
        };
        let xml = render_sink(&encoder, &record);
        assert!(xml.starts_with(r#"<Sink Statement="s1"><AccessPath"#));
    }

    #[test]
    fn missing_line_number_is_tolerated() {
        let encoder = SourceSinkEncoder::new(&true, None, &NoExtension, true);
        let mut record = sink();
        record.statement.line_number = None;
        let xml = render_sink(&encoder, &record);
        assert!(!xml.contains("LineNumber"));
    }
}
