//! Statement → enclosing method lookup.

use crate::types::collections::FxHashMap;
use crate::types::Statement;

/// Resolves the method a statement belongs to.
///
/// Returns `None` when the statement cannot be placed; the writer then
/// leaves the `method` attribute out.
pub trait MethodResolver {
    fn method_of(&self, statement: &Statement) -> Option<String>;
}

impl<F> MethodResolver for F
where
    F: Fn(&Statement) -> Option<String>,
{
    fn method_of(&self, statement: &Statement) -> Option<String> {
        self(statement)
    }
}

/// Lookup table keyed by statement text.
impl MethodResolver for FxHashMap<String, String> {
    fn method_of(&self, statement: &Statement) -> Option<String> {
        self.get(&statement.text).cloned()
    }
}
