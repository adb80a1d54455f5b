//! Canonical path computation for import specifiers.
//!
//! Paths are POSIX-style `/`-separated strings with no extension; the
//! resulting canonical path is the module's identity for visited-tracking
//! and fetching. This is a pure function: malformed specifiers (such as
//! ascent past the root) are not rejected here, the subsequent fetch simply
//! fails with a not-found error.

use crate::ast::ImportSpecifier;

/// Compute the canonical path of an import.
///
/// Scoped imports resolve to `<module_root>/<target>/index` and ignore the
/// importer entirely. Relative imports resolve against the importer's
/// directory: each leading `..` ascends one level, after which at most one
/// leading `.` is stripped. A specifier like `././x` is deliberately not
/// normalized further; only the first `.` is consumed.
pub fn resolve_import_path(module_root: &str, importer_path: &str, spec: &ImportSpecifier) -> String {
    if spec.scoped {
        return format!("{module_root}/{}/index", spec.target_path);
    }

    let mut dir: Vec<&str> = importer_path.split('/').collect();
    dir.pop(); // drop the importer's file name

    let segments: Vec<&str> = spec.target_path.split('/').collect();
    let mut rel = segments.as_slice();

    while rel.first() == Some(&"..") {
        dir.pop();
        rel = &rel[1..];
    }
    if rel.first() == Some(&".") {
        rel = &rel[1..];
    }

    dir.extend_from_slice(rel);
    dir.join("/")
}
