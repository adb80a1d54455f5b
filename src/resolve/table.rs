//! The merged symbol table.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::ast::{FunctionDef, PathRuleDef, SchemaDef, SourceUnit};

/// Union of all symbols declared across one compilation unit's files.
///
/// Created empty at the start of a `resolve` call and handed to the caller on
/// success; the only artifact that outlives resolution. The three namespaces
/// are independent: a schema named `X` never collides with a function named
/// `X`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedSymbolTable {
    functions: IndexMap<SmolStr, FunctionDef>,
    schemas: IndexMap<SmolStr, SchemaDef>,
    path_rules: IndexMap<SmolStr, PathRuleDef>,
}

impl MergedSymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one file's namespaces into the table.
    ///
    /// This is a single atomic step per file: callers must not interleave it
    /// with another file's merge (the engine guarantees this by holding the
    /// table lock for the whole call). On a name collision within a namespace
    /// the incoming definition wins; completion order across concurrently
    /// fetched files therefore decides the survivor.
    pub fn merge_unit(&mut self, unit: SourceUnit) {
        for (name, def) in unit.functions {
            if let Some(prev) = self.functions.insert(name.clone(), def) {
                tracing::debug!(
                    symbol = %name,
                    earlier = %prev.origin,
                    "function redefined; last merged definition wins"
                );
            }
        }
        for (name, def) in unit.schemas {
            if let Some(prev) = self.schemas.insert(name.clone(), def) {
                tracing::debug!(
                    symbol = %name,
                    earlier = %prev.origin,
                    "schema redefined; last merged definition wins"
                );
            }
        }
        for (name, def) in unit.path_rules {
            if let Some(prev) = self.path_rules.insert(name.clone(), def) {
                tracing::debug!(
                    symbol = %name,
                    earlier = %prev.origin,
                    "path rule redefined; last merged definition wins"
                );
            }
        }
    }

    pub fn functions(&self) -> &IndexMap<SmolStr, FunctionDef> {
        &self.functions
    }

    pub fn schemas(&self) -> &IndexMap<SmolStr, SchemaDef> {
        &self.schemas
    }

    pub fn path_rules(&self) -> &IndexMap<SmolStr, PathRuleDef> {
        &self.path_rules
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    pub fn schema(&self, name: &str) -> Option<&SchemaDef> {
        self.schemas.get(name)
    }

    pub fn path_rule(&self, name: &str) -> Option<&PathRuleDef> {
        self.path_rules.get(name)
    }

    /// Total number of symbols across all three namespaces.
    pub fn symbol_count(&self) -> usize {
        self.functions.len() + self.schemas.len() + self.path_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_count() == 0
    }
}
