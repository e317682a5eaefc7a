#![allow(dead_code)]
//! Shared helpers: fixture builders and a minimal element tree read back
//! from serializer output.

use flowreport_core::{
    AccessPath, AnalysisResult, Definition, ReportConfig, SinkRecord, SourceRecord, Statement,
    TaintPath,
};
use flowreport_xml::ResultsSerializer;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// An element with its attributes (in document order) and child elements.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attr_names(&self) -> Vec<&str> {
        self.attrs.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named(&self, name: &str) -> Vec<&Node> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }
}

fn to_node(start: &BytesStart<'_>) -> Node {
    let name = String::from_utf8(start.name().as_ref().to_vec()).unwrap();
    let attrs = start
        .attributes()
        .map(|a| {
            let a = a.unwrap();
            (
                String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                a.unescape_value().unwrap().into_owned(),
            )
        })
        .collect();
    Node {
        name,
        attrs,
        children: Vec::new(),
    }
}

/// Parse a serialized document into its root element.
pub fn parse(xml: &str) -> Node {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root = None;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => stack.push(to_node(&e)),
            Event::Empty(e) => {
                let node = to_node(&e);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Event::End(_) => {
                let node = stack.pop().unwrap();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    assert!(stack.is_empty(), "unbalanced document");
    root.expect("document has no root element")
}

// ─── Fixtures ──────────────────────────────────────────────────────────────

pub fn compact_config() -> ReportConfig {
    ReportConfig {
        indent: Some(0),
        ..ReportConfig::default()
    }
}

pub fn render(serializer: &ResultsSerializer<'_>, result: &AnalysisResult) -> Node {
    parse(&serializer.serialize_to_string(result).unwrap())
}

pub fn plain_sink(stmt: &str) -> SinkRecord {
    SinkRecord::new(stmt, AccessPath::local("x", "java.lang.String"), Definition::default())
}

pub fn plain_source(stmt: &str) -> SourceRecord {
    SourceRecord::new(stmt, AccessPath::local("y", "java.lang.String"), Definition::default())
}

/// A path of `n` steps named `p0..pn`, each tainting local `v{i}`.
pub fn path_of(n: usize) -> TaintPath {
    TaintPath::from_steps((0..n).map(|i| {
        (
            Statement::new(format!("p{i}")),
            AccessPath::local(format!("v{i}"), "int"),
        )
    }))
}
