//! Symbol definitions declared by a source file.
//!
//! The grammar of bodies is opaque to the resolver; each definition carries
//! its name, its raw body text, and the canonical path of the module that
//! declared it. The `origin` field is what makes merge conflicts diagnosable:
//! after resolution, the surviving definition names the file it came from.

use smol_str::SmolStr;

/// A named function declared by a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// Symbol name within the function namespace
    pub name: SmolStr,
    /// Parameter names, in declaration order
    pub params: Vec<SmolStr>,
    /// Raw body text (opaque to the resolver)
    pub body: String,
    /// Canonical path of the declaring module
    pub origin: SmolStr,
}

impl FunctionDef {
    /// Create a parameterless function definition.
    pub fn new(
        name: impl Into<SmolStr>,
        body: impl Into<String>,
        origin: impl Into<SmolStr>,
    ) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            body: body.into(),
            origin: origin.into(),
        }
    }

    /// Set the parameter list.
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }
}

/// A schema (type) definition declared by a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDef {
    /// Symbol name within the schema namespace
    pub name: SmolStr,
    /// Raw body text (opaque to the resolver)
    pub body: String,
    /// Canonical path of the declaring module
    pub origin: SmolStr,
}

impl SchemaDef {
    pub fn new(
        name: impl Into<SmolStr>,
        body: impl Into<String>,
        origin: impl Into<SmolStr>,
    ) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            origin: origin.into(),
        }
    }
}

/// A path-rule definition declared by a source file.
///
/// Path rules bind a path template (e.g. `/accounts/{id}`) to rule text; the
/// template is kept verbatim, the resolver only needs the rule's name for
/// namespace merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRuleDef {
    /// Symbol name within the path-rule namespace
    pub name: SmolStr,
    /// Path template this rule applies to
    pub template: String,
    /// Raw body text (opaque to the resolver)
    pub body: String,
    /// Canonical path of the declaring module
    pub origin: SmolStr,
}

impl PathRuleDef {
    pub fn new(
        name: impl Into<SmolStr>,
        template: impl Into<String>,
        body: impl Into<String>,
        origin: impl Into<SmolStr>,
    ) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            body: body.into(),
            origin: origin.into(),
        }
    }
}
