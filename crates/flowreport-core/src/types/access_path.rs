//! Access paths: a tainted base value plus its chain of field dereferences.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One field dereference in an access path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccessPathFragment {
    /// Field descriptor, e.g. `<com.example.User: java.lang.String name>`.
    pub field: String,
    /// Declared type of the field.
    pub field_type: String,
}

impl AccessPathFragment {
    pub fn new(field: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            field_type: field_type.into(),
        }
    }
}

/// A tainted value expression.
///
/// `fragments` is ordered: `base.f0.f1...`. An empty chain means the base
/// value itself is tainted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AccessPath {
    #[serde(default)]
    pub plain_value: Option<String>,
    #[serde(default)]
    pub base_type: Option<String>,
    #[serde(default)]
    pub taint_sub_fields: bool,
    #[serde(default)]
    pub fragments: SmallVec<[AccessPathFragment; 4]>,
}

impl AccessPath {
    /// Access path on a plain local with no field chain.
    pub fn local(value: impl Into<String>, base_type: impl Into<String>) -> Self {
        Self {
            plain_value: Some(value.into()),
            base_type: Some(base_type.into()),
            taint_sub_fields: false,
            fragments: SmallVec::new(),
        }
    }

    pub fn with_taint_sub_fields(mut self, taint_sub_fields: bool) -> Self {
        self.taint_sub_fields = taint_sub_fields;
        self
    }

    /// Appends one dereference to the end of the chain.
    pub fn with_field(mut self, field: impl Into<String>, field_type: impl Into<String>) -> Self {
        self.fragments.push(AccessPathFragment::new(field, field_type));
        self
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    pub fn has_fields(&self) -> bool {
        !self.fragments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_preserves_chain_order() {
        let ap = AccessPath::local("r1", "com.example.Request")
            .with_field("session", "com.example.Session")
            .with_field("token", "java.lang.String");
        let fields: Vec<&str> = ap.fragments.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["session", "token"]);
        assert_eq!(ap.fragment_count(), 2);
    }

    #[test]
    fn missing_json_fields_default() {
        let ap: AccessPath = serde_json::from_str(r#"{ "plain_value": "x" }"#).unwrap();
        assert_eq!(ap.plain_value.as_deref(), Some("x"));
        assert!(ap.base_type.is_none());
        assert!(!ap.taint_sub_fields);
        assert!(!ap.has_fields());
    }
}
