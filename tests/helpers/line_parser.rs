//! Line-oriented stand-in for the external Warden parser.
//!
//! One declaration per line:
//!
//! ```text
//! import ./sibling
//! import ../shared/util as util
//! import @authlib
//! fn isOwner auth.uid == resource.owner
//! schema Account { name: String }
//! path accounts /accounts/{id} allow read, write
//! ```
//!
//! Anything else is a parse error at that line, which is exactly what the
//! failure-propagation tests need.

use warden::ast::{FunctionDef, ImportSpecifier, PathRuleDef, SchemaDef, SourceUnit};
use warden::parse::{LineCol, ParseError, UnitParser};

pub struct LineParser;

impl UnitParser for LineParser {
    fn parse(&self, path: &str, text: &str) -> Result<SourceUnit, ParseError> {
        let mut unit = SourceUnit::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let (keyword, rest) = line.split_once(' ').unwrap_or((line, ""));
            match keyword {
                "import" => {
                    let (target, alias) = match rest.split_once(" as ") {
                        Some((target, alias)) => (target.trim(), Some(alias.trim())),
                        None => (rest, None),
                    };
                    let mut spec = match target.strip_prefix('@') {
                        Some(lib) => ImportSpecifier::scoped(lib),
                        None => ImportSpecifier::relative(target),
                    };
                    if let Some(alias) = alias {
                        spec = spec.with_alias(alias);
                    }
                    unit.push_import(spec);
                }
                "fn" => {
                    let (name, body) = rest.split_once(' ').unwrap_or((rest, "true"));
                    unit.define_function(FunctionDef::new(name, body, path));
                }
                "schema" => {
                    let (name, body) = rest.split_once(' ').unwrap_or((rest, "{}"));
                    unit.define_schema(SchemaDef::new(name, body, path));
                }
                "path" => {
                    let mut parts = rest.splitn(3, ' ');
                    let name = parts.next().unwrap_or_default();
                    let template = parts.next().unwrap_or("/");
                    let body = parts.next().unwrap_or("allow read");
                    unit.define_path_rule(PathRuleDef::new(name, template, body, path));
                }
                other => {
                    return Err(ParseError::new(
                        path,
                        format!("unknown declaration '{other}'"),
                    )
                    .with_location(LineCol::new(idx as u32 + 1, 1)));
                }
            }
        }
        Ok(unit)
    }
}
