//! Extension points for attaching implementation-specific attributes to
//! sink and source nodes.

use crate::types::{SinkRecord, SourceRecord};

/// Append-only attribute list handed to an [`AttributeExtension`].
///
/// Names in `reserved` belong to the standard attribute set and are
/// refused, so an extension can add to a node but never shadow what the
/// writer already put there.
#[derive(Debug)]
pub struct ExtraAttributes<'a> {
    reserved: &'a [&'a str],
    entries: Vec<(String, String)>,
}

impl<'a> ExtraAttributes<'a> {
    pub fn new(reserved: &'a [&'a str]) -> Self {
        Self {
            reserved,
            entries: Vec::new(),
        }
    }

    /// Appends an attribute. Returns false (and drops it) if the name is
    /// not a valid XML name, is reserved, or was already added.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if !is_xml_name(&name) {
            tracing::warn!(attribute = %name, "extension attribute refused: not a valid XML name");
            return false;
        }
        if self.reserved.contains(&name.as_str()) || self.entries.iter().any(|(n, _)| *n == name) {
            tracing::warn!(attribute = %name, "extension attribute refused: name already in use");
            return false;
        }
        self.entries.push((name, value.into()));
        true
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn into_entries(self) -> Vec<(String, String)> {
        self.entries
    }
}

/// Attribute values are escaped by the writer, names are written as-is,
/// so they must already be well-formed.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == ':')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

/// Hooks invoked after the standard attributes of a node are in place.
/// Both default to adding nothing.
pub trait AttributeExtension {
    fn sink_attributes(&self, _sink: &SinkRecord, _attrs: &mut ExtraAttributes<'_>) {}

    fn source_attributes(&self, _source: &SourceRecord, _attrs: &mut ExtraAttributes<'_>) {}
}

/// The extension used when none is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExtension;

impl AttributeExtension for NoExtension {}
