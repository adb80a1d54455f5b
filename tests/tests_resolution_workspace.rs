//! End-to-end resolution over an on-disk workspace.
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod helpers;

use std::fs;
use std::time::Duration;

use helpers::fixtures::write_module;
use helpers::line_parser::LineParser;
use warden::loader::FsSourceLoader;
use warden::{ResolveError, Resolver, ResolverConfig};

#[tokio::test]
async fn test_resolves_multi_directory_workspace() {
    let dir = tempfile::tempdir().unwrap();
    write_module(
        dir.path(),
        "proj/main.rules",
        "import ./defs\nimport ../lib/util\nimport @auth\npath accounts /accounts/{id} allow read",
    );
    write_module(dir.path(), "proj/defs.rules", "schema Account { name: String }");
    write_module(dir.path(), "lib/util.rules", "fn tick request.time");
    write_module(
        dir.path(),
        "modules/auth/index.rules",
        "fn isSignedIn auth != null",
    );

    let entry_text = fs::read_to_string(dir.path().join("proj/main.rules")).unwrap();
    let resolver = Resolver::new(FsSourceLoader::new(dir.path()), LineParser);

    let table = resolver.resolve("proj/main", &entry_text).await.unwrap();

    assert_eq!(table.symbol_count(), 4);
    assert_eq!(table.schema("Account").unwrap().origin, "proj/defs");
    assert_eq!(table.function("tick").unwrap().origin, "lib/util");
    assert_eq!(
        table.function("isSignedIn").unwrap().origin,
        "modules/auth/index"
    );
    assert_eq!(
        table.path_rule("accounts").unwrap().template,
        "/accounts/{id}"
    );
}

#[tokio::test]
async fn test_transitive_imports_reach_three_levels() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "a.rules", "import ./b\nfn a true");
    write_module(dir.path(), "b.rules", "import ./c\nfn b true");
    write_module(dir.path(), "c.rules", "fn c true");

    let entry_text = fs::read_to_string(dir.path().join("a.rules")).unwrap();
    let resolver = Resolver::new(FsSourceLoader::new(dir.path()), LineParser);

    let table = resolver.resolve("a", &entry_text).await.unwrap();
    assert_eq!(table.functions().len(), 3);
}

#[tokio::test]
async fn test_aliased_import_resolves_normally() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "proj/main.rules", "import ./defs as d\nfn m true");
    write_module(dir.path(), "proj/defs.rules", "schema Account {}");

    let entry_text = fs::read_to_string(dir.path().join("proj/main.rules")).unwrap();
    let resolver = Resolver::new(FsSourceLoader::new(dir.path()), LineParser);

    let table = resolver.resolve("proj/main", &entry_text).await.unwrap();
    assert!(table.schema("Account").is_some());
}

#[tokio::test]
async fn test_custom_extension_workspace() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "main.wdn", "import ./other");
    write_module(dir.path(), "other.wdn", "fn o true");

    let entry_text = fs::read_to_string(dir.path().join("main.wdn")).unwrap();
    let resolver = Resolver::new(FsSourceLoader::new(dir.path()), LineParser)
        .with_config(ResolverConfig::new().with_source_extension("wdn"));

    let table = resolver.resolve("main", &entry_text).await.unwrap();
    assert!(table.function("o").is_some());
}

#[tokio::test]
async fn test_missing_module_reports_chain_in_message() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "proj/main.rules", "import ./present\nfn m true");
    write_module(dir.path(), "proj/present.rules", "import ./absent");

    let entry_text = fs::read_to_string(dir.path().join("proj/main.rules")).unwrap();
    let resolver = Resolver::new(FsSourceLoader::new(dir.path()), LineParser);

    let err = resolver.resolve("proj/main", &entry_text).await.unwrap_err();

    assert!(matches!(err, ResolveError::NotFound { .. }), "got: {err}");
    let message = err.to_string();
    assert!(message.contains("proj/absent"), "message: {message}");
    assert!(
        message.contains("proj/main -> proj/present"),
        "message: {message}"
    );
}

#[tokio::test]
async fn test_parse_failure_in_imported_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "main.rules", "import ./broken\nfn m true");
    write_module(dir.path(), "broken.rules", "fn ok true\nnonsense here");

    let entry_text = fs::read_to_string(dir.path().join("main.rules")).unwrap();
    let resolver = Resolver::new(FsSourceLoader::new(dir.path()), LineParser);

    let err = resolver.resolve("main", &entry_text).await.unwrap_err();

    match err {
        ResolveError::Parse { source, .. } => {
            assert_eq!(source.path, "broken");
            assert_eq!(source.location.map(|l| l.line), Some(2));
        }
        other => panic!("expected Parse error, got: {other}"),
    }
}

#[tokio::test]
async fn test_timeout_config_is_harmless_on_fast_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "main.rules", "import ./other");
    write_module(dir.path(), "other.rules", "fn o true");

    let entry_text = fs::read_to_string(dir.path().join("main.rules")).unwrap();
    let resolver = Resolver::new(FsSourceLoader::new(dir.path()), LineParser)
        .with_config(ResolverConfig::new().with_fetch_timeout(Duration::from_secs(5)));

    let table = resolver.resolve("main", &entry_text).await.unwrap();
    assert!(table.function("o").is_some());
}
