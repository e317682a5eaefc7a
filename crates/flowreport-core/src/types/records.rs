//! Sink and source records handed over by the analysis engine.

use serde::{Deserialize, Serialize};

use super::access_path::AccessPath;
use crate::errors::ModelError;

/// A program location, identified by its stable textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    /// Source line, when the engine had debug info for it.
    #[serde(default)]
    pub line_number: Option<u32>,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            line_number: None,
        }
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line_number = Some(line);
        self
    }
}

impl From<&str> for Statement {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Where a source/sink definition was declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefinitionOrigin {
    /// Definition matched on a method call. The signature is the method the
    /// definition names, not the method the statement sits in.
    Method { signature: Option<String> },
    /// Definition matched on a field access.
    Field { signature: String },
    /// Definition matched on a specific statement.
    Statement,
    #[default]
    Unspecified,
}

/// Why a statement was classified as a source or sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Definition {
    /// Human-readable category description, e.g. "Network".
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub origin: DefinitionOrigin,
}

impl Definition {
    pub fn method(signature: impl Into<String>) -> Self {
        Self {
            category: None,
            origin: DefinitionOrigin::Method {
                signature: Some(signature.into()),
            },
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Signature of the method this definition was declared on, if it is a
    /// method-based definition that names one.
    pub fn method_signature(&self) -> Option<&str> {
        match &self.origin {
            DefinitionOrigin::Method { signature } => signature.as_deref(),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawTaintPath {
    statements: Vec<Statement>,
    access_paths: Vec<AccessPath>,
}

impl TryFrom<RawTaintPath> for TaintPath {
    type Error = ModelError;

    fn try_from(raw: RawTaintPath) -> Result<Self, Self::Error> {
        TaintPath::new(raw.statements, raw.access_paths)
    }
}

/// Ordered propagation chain from a source towards its sink.
///
/// Statement `i` pairs with access path `i`; both sequences always have
/// the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTaintPath")]
pub struct TaintPath {
    statements: Vec<Statement>,
    access_paths: Vec<AccessPath>,
}

impl TaintPath {
    pub fn new(
        statements: Vec<Statement>,
        access_paths: Vec<AccessPath>,
    ) -> Result<Self, ModelError> {
        if statements.len() != access_paths.len() {
            return Err(ModelError::TaintPathLengthMismatch {
                statements: statements.len(),
                access_paths: access_paths.len(),
            });
        }
        Ok(Self {
            statements,
            access_paths,
        })
    }

    /// Builds a path from already paired steps.
    pub fn from_steps(steps: impl IntoIterator<Item = (Statement, AccessPath)>) -> Self {
        let (statements, access_paths) = steps.into_iter().unzip();
        Self {
            statements,
            access_paths,
        }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn access_paths(&self) -> &[AccessPath] {
        &self.access_paths
    }

    /// Paired steps in path order.
    pub fn steps(&self) -> impl Iterator<Item = (&Statement, &AccessPath)> {
        self.statements.iter().zip(self.access_paths.iter())
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Re-checks the pairing invariant.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.statements.len() == self.access_paths.len() {
            Ok(())
        } else {
            Err(ModelError::TaintPathLengthMismatch {
                statements: self.statements.len(),
                access_paths: self.access_paths.len(),
            })
        }
    }
}

/// A sink: where tainted data is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SinkRecord {
    pub statement: Statement,
    pub access_path: AccessPath,
    #[serde(default)]
    pub definition: Definition,
}

impl SinkRecord {
    pub fn new(statement: impl Into<Statement>, access_path: AccessPath, definition: Definition) -> Self {
        Self {
            statement: statement.into(),
            access_path,
            definition,
        }
    }
}

/// A source: where tainted data originates, optionally with the path it
/// took to reach its sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRecord {
    pub statement: Statement,
    pub access_path: AccessPath,
    #[serde(default)]
    pub definition: Definition,
    #[serde(default)]
    pub path: Option<TaintPath>,
}

impl SourceRecord {
    pub fn new(statement: impl Into<Statement>, access_path: AccessPath, definition: Definition) -> Self {
        Self {
            statement: statement.into(),
            access_path,
            definition,
            path: None,
        }
    }

    pub fn with_path(mut self, path: TaintPath) -> Self {
        self.path = Some(path);
        self
    }
}
