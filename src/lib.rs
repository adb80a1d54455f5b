//! # warden-base
//!
//! Core library for Warden rule-language module resolution and symbol merging.
//!
//! Given the text of an entry source file, the resolver discovers its `import`
//! declarations, recursively fetches and parses every transitively imported
//! module, and merges all declared symbols (functions, schemas, path rules)
//! into one [`MergedSymbolTable`] for the downstream rule generator.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve   → ResolutionEngine: recursive fetch/parse/merge, path resolution
//!   ↓
//! loader    → SourceLoader boundary, filesystem and in-memory loaders
//!   ↓
//! parse     → UnitParser boundary, ParseError/LineCol
//!   ↓
//! ast       → ImportSpecifier, SourceUnit, symbol definitions
//! ```
//!
//! The DSL grammar itself lives behind the [`parse::UnitParser`] trait and the
//! generated ruleset behind the table handed to the generator; neither is part
//! of this crate.

/// Source-unit data model: import specifiers and symbol definitions
pub mod ast;

/// Source loading: the async loader boundary plus concrete loaders
pub mod loader;

/// Parsing boundary: the `UnitParser` trait and parse-error types
pub mod parse;

/// Resolution engine: path resolution, recursive fetch/merge, symbol table
pub mod resolve;

// Re-export the types most callers need
pub use ast::{ImportSpecifier, SourceUnit};
pub use resolve::{MergedSymbolTable, ResolveError, Resolver, ResolverConfig};
