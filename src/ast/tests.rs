#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn test_import_specifier_constructors() {
    let rel = ImportSpecifier::relative("../shared/util");
    assert_eq!(rel.target_path, "../shared/util");
    assert!(!rel.scoped);
    assert!(rel.alias.is_none());

    let scoped = ImportSpecifier::scoped("libfoo").with_alias("foo");
    assert!(scoped.scoped);
    assert_eq!(scoped.alias.as_deref(), Some("foo"));
}

#[test]
fn test_source_unit_declaration_order_preserved() {
    let mut unit = SourceUnit::new();
    unit.define_function(FunctionDef::new("isOwner", "auth.id == owner", "proj/base"));
    unit.define_function(FunctionDef::new("isAdmin", "auth.admin", "proj/base"));

    let names: Vec<_> = unit.functions.keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["isOwner", "isAdmin"]);
}

#[test]
fn test_source_unit_redeclaration_keeps_later() {
    let mut unit = SourceUnit::new();
    unit.define_schema(SchemaDef::new("Account", "{ name: String }", "proj/a"));
    unit.define_schema(SchemaDef::new("Account", "{ name: String, age: Int }", "proj/a"));

    assert_eq!(unit.schemas.len(), 1);
    assert_eq!(unit.schemas["Account"].body, "{ name: String, age: Int }");
}

#[test]
fn test_symbol_count_spans_namespaces() {
    let mut unit = SourceUnit::new();
    assert!(unit.is_empty());

    unit.define_function(FunctionDef::new("f", "true", "m"));
    unit.define_schema(SchemaDef::new("S", "{}", "m"));
    unit.define_path_rule(PathRuleDef::new("r", "/x/{id}", "allow read", "m"));
    unit.push_import(ImportSpecifier::relative("./other"));

    assert_eq!(unit.symbol_count(), 3);
    assert!(!unit.is_empty());
}
