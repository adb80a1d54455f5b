//! Module resolution: the recursive fetch/parse/merge engine.
//!
//! [`Resolver::resolve`] takes the text of an entry file and produces one
//! [`MergedSymbolTable`] covering every transitively imported module, or a
//! terminal [`ResolveError`]. Canonical path computation is a pure function
//! in [`path`]; everything stateful lives in the engine.

mod config;
mod engine;
mod error;
mod path;
mod table;

pub use config::ResolverConfig;
pub use engine::Resolver;
pub use error::{ImportChain, ResolveError};
pub use path::resolve_import_path;
pub use table::MergedSymbolTable;
