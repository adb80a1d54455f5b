//! Import specifiers and the per-file source unit.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::{FunctionDef, PathRuleDef, SchemaDef};

/// One `import` declaration as written in a source file.
///
/// Scoped imports (`scoped == true`) are library-style: they resolve against
/// the configured module root and ignore the importing file's location.
/// Relative imports resolve against the importer's directory using `.` and
/// `..` segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// Import target as written (relative path or library name)
    pub target_path: SmolStr,
    /// Optional local alias (`import ./x as y`); carried for downstream
    /// tooling, not consulted during resolution
    pub alias: Option<SmolStr>,
    /// Library-style import resolved against the module root
    pub scoped: bool,
}

impl ImportSpecifier {
    /// A relative, path-based import.
    pub fn relative(target_path: impl Into<SmolStr>) -> Self {
        Self {
            target_path: target_path.into(),
            alias: None,
            scoped: false,
        }
    }

    /// A scoped (library-style) import.
    pub fn scoped(target_path: impl Into<SmolStr>) -> Self {
        Self {
            target_path: target_path.into(),
            alias: None,
            scoped: true,
        }
    }

    /// Attach a local alias.
    pub fn with_alias(mut self, alias: impl Into<SmolStr>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// The parsed form of one source file.
///
/// Namespaces are `IndexMap`s keyed by symbol name so declaration order is
/// preserved; a file that declares the same name twice keeps the later
/// declaration (the parser is expected to have diagnosed that already).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceUnit {
    /// Import declarations in source order
    pub imports: Vec<ImportSpecifier>,
    /// Named function definitions
    pub functions: IndexMap<SmolStr, FunctionDef>,
    /// Schema (type) definitions
    pub schemas: IndexMap<SmolStr, SchemaDef>,
    /// Path-rule definitions
    pub path_rules: IndexMap<SmolStr, PathRuleDef>,
}

impl SourceUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an import declaration.
    pub fn push_import(&mut self, spec: ImportSpecifier) {
        self.imports.push(spec);
    }

    /// Declare a function, replacing any earlier declaration of the same name.
    pub fn define_function(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.clone(), def);
    }

    /// Declare a schema, replacing any earlier declaration of the same name.
    pub fn define_schema(&mut self, def: SchemaDef) {
        self.schemas.insert(def.name.clone(), def);
    }

    /// Declare a path rule, replacing any earlier declaration of the same name.
    pub fn define_path_rule(&mut self, def: PathRuleDef) {
        self.path_rules.insert(def.name.clone(), def);
    }

    /// Total number of declared symbols across all three namespaces.
    pub fn symbol_count(&self) -> usize {
        self.functions.len() + self.schemas.len() + self.path_rules.len()
    }

    /// True when the unit declares no symbols and no imports.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.symbol_count() == 0
    }
}
