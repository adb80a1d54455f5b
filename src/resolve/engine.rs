//! The resolution engine.
//!
//! One `resolve` call walks the import graph from the entry file: fetch a
//! module's text, parse it, merge its namespaces into the shared table, then
//! fan out over its imports. Sibling imports of a file are fetched
//! concurrently and joined before the file counts as transitively resolved;
//! a visited set marked before each fetch is issued keeps cyclic graphs
//! terminating and every module fetched at most once.
//!
//! Any fetch or parse failure anywhere in the graph is fatal to the whole
//! call. The first failure trips a shared cancellation token so branches that
//! have not started their fetch, or are still waiting on one, are abandoned
//! instead of running to completion as orphaned work.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::ast::ImportSpecifier;
use crate::loader::{LoadError, SourceLoader};
use crate::parse::UnitParser;

use super::config::ResolverConfig;
use super::error::{ImportChain, ResolveError};
use super::path::resolve_import_path;
use super::table::MergedSymbolTable;

type BranchResult = Result<(), ResolveError>;
type BranchFuture = Pin<Box<dyn Future<Output = BranchResult> + Send>>;

/// State shared by every branch of one `resolve` call.
///
/// All mutation of `table` and `visited` happens under their mutexes and
/// never across a suspension point, which is what keeps each file's merge
/// atomic and the check-visited-then-mark step race-free on a multi-threaded
/// runtime.
struct ResolveState<L, P> {
    loader: Arc<L>,
    parser: Arc<P>,
    config: ResolverConfig,
    table: Mutex<MergedSymbolTable>,
    visited: Mutex<FxHashSet<SmolStr>>,
    cancel: CancellationToken,
}

/// Recursive module resolver.
///
/// Built once per loader/parser pair and reusable across entry files; each
/// [`resolve`](Resolver::resolve) call gets its own table, visited set, and
/// cancellation token.
pub struct Resolver<L, P> {
    loader: Arc<L>,
    parser: Arc<P>,
    config: ResolverConfig,
}

impl<L: SourceLoader, P: UnitParser> Resolver<L, P> {
    pub fn new(loader: L, parser: P) -> Self {
        Self {
            loader: Arc::new(loader),
            parser: Arc::new(parser),
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `entry_text` (the already-loaded text of the entry file) and
    /// every module it transitively imports into one merged table.
    ///
    /// Must be called within a Tokio runtime: sibling imports are spawned as
    /// tasks. On failure no table is returned, however many branches had
    /// already merged.
    pub async fn resolve(
        &self,
        entry_path: &str,
        entry_text: &str,
    ) -> Result<MergedSymbolTable, ResolveError> {
        let state = Arc::new(ResolveState {
            loader: self.loader.clone(),
            parser: self.parser.clone(),
            config: self.config.clone(),
            table: Mutex::new(MergedSymbolTable::new()),
            visited: Mutex::new(FxHashSet::default()),
            cancel: CancellationToken::new(),
        });

        let entry = SmolStr::new(entry_path);
        state.visited.lock().insert(entry.clone());

        match Self::resolve_entry(&state, &entry, entry_text).await {
            Ok(()) => {
                let table = std::mem::take(&mut *state.table.lock());
                tracing::debug!(
                    entry = %entry,
                    modules = state.visited.lock().len(),
                    symbols = table.symbol_count(),
                    "module resolution complete"
                );
                Ok(table)
            }
            Err(err) => {
                tracing::warn!(entry = %entry, error = %err, "module resolution failed");
                Err(err)
            }
        }
    }

    async fn resolve_entry(
        state: &Arc<ResolveState<L, P>>,
        entry: &SmolStr,
        text: &str,
    ) -> BranchResult {
        let chain = ImportChain::root(entry.clone());
        let mut unit = state
            .parser
            .parse(entry, text)
            .map_err(|source| ResolveError::Parse {
                chain: chain.clone(),
                source,
            })?;

        let imports = std::mem::take(&mut unit.imports);
        tracing::debug!(module = %entry, symbols = unit.symbol_count(), "merging entry module");
        state.table.lock().merge_unit(unit);

        Self::resolve_imports(state.clone(), entry.clone(), imports, chain).await
    }

    /// Fan out over one file's imports and join all branches.
    ///
    /// `chain` is the importer chain ending at `importer`. The first branch
    /// failure trips the cancellation token; remaining branches are still
    /// joined so none of them outlives the call, and a real error is always
    /// preferred over the `Cancelled` results it caused.
    async fn resolve_imports(
        state: Arc<ResolveState<L, P>>,
        importer: SmolStr,
        imports: Vec<ImportSpecifier>,
        chain: ImportChain,
    ) -> BranchResult {
        if imports.is_empty() {
            return Ok(());
        }

        let mut branches: JoinSet<BranchResult> = JoinSet::new();
        for spec in &imports {
            let canonical = SmolStr::new(resolve_import_path(
                &state.config.module_root,
                &importer,
                spec,
            ));
            // Check-visited-then-mark under one lock, before the fetch is
            // issued: concurrent siblings requesting the same module observe
            // the in-flight marker and skip it.
            if !state.visited.lock().insert(canonical.clone()) {
                tracing::trace!(module = %canonical, "already visited; skipping");
                continue;
            }
            branches.spawn(Self::visit(state.clone(), canonical, chain.clone()));
        }

        let mut first_error: Option<ResolveError> = None;
        while let Some(joined) = branches.join_next().await {
            let result = match joined {
                Ok(result) => result,
                Err(err) if err.is_cancelled() => Ok(()),
                // Loader/parser panics are bugs in the collaborator; surface
                // them as panics rather than resolution errors.
                Err(err) => std::panic::resume_unwind(err.into_panic()),
            };
            if let Err(err) = result {
                state.cancel.cancel();
                // A real failure always beats the cancellations it caused.
                let replace = match &first_error {
                    None => true,
                    Some(existing) => existing.is_cancelled() && !err.is_cancelled(),
                };
                if replace {
                    first_error = Some(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Fetch, parse, and merge one module, then recurse into its imports.
    ///
    /// Boxed so the recursion through `resolve_imports` has a nameable
    /// future type.
    fn visit(state: Arc<ResolveState<L, P>>, module: SmolStr, chain: ImportChain) -> BranchFuture {
        Box::pin(async move {
            if state.cancel.is_cancelled() {
                return Err(ResolveError::Cancelled { path: module });
            }

            let text = Self::fetch(&state, &module, &chain).await?;
            let mut unit =
                state
                    .parser
                    .parse(&module, &text)
                    .map_err(|source| ResolveError::Parse {
                        chain: chain.clone(),
                        source,
                    })?;

            let imports = std::mem::take(&mut unit.imports);
            tracing::debug!(
                module = %module,
                symbols = unit.symbol_count(),
                imports = imports.len(),
                "merging module"
            );
            state.table.lock().merge_unit(unit);

            let child_chain = chain.child(module.clone());
            Self::resolve_imports(state, module, imports, child_chain).await
        })
    }

    /// Fetch one module's text, racing the shared cancellation token and the
    /// configured timeout against the loader.
    async fn fetch(
        state: &ResolveState<L, P>,
        module: &SmolStr,
        chain: &ImportChain,
    ) -> Result<String, ResolveError> {
        let request = format!("{}.{}", module, state.config.source_extension);
        tracing::debug!(module = %module, file = %request, "fetching module source");

        let load = async {
            match state.config.fetch_timeout {
                Some(limit) => {
                    match tokio::time::timeout(limit, state.loader.load(&request)).await {
                        Ok(result) => result.map_err(|err| Self::load_error(err, module, chain)),
                        Err(_) => Err(ResolveError::Timeout {
                            path: module.clone(),
                            chain: chain.clone(),
                            elapsed: limit,
                        }),
                    }
                }
                None => state
                    .loader
                    .load(&request)
                    .await
                    .map_err(|err| Self::load_error(err, module, chain)),
            }
        };

        tokio::select! {
            () = state.cancel.cancelled() => Err(ResolveError::Cancelled {
                path: module.clone(),
            }),
            result = load => result,
        }
    }

    fn load_error(err: LoadError, module: &SmolStr, chain: &ImportChain) -> ResolveError {
        match err {
            LoadError::NotFound { .. } => ResolveError::NotFound {
                path: module.clone(),
                chain: chain.clone(),
            },
            LoadError::Io { source, .. } => ResolveError::Load {
                path: module.clone(),
                chain: chain.clone(),
                source,
            },
        }
    }
}
