//! ResolverService: the application-layer seam over the pure resolver core
//!
//! Owns the three collaborators `Resolver` is constructed from
//! (`CanonicalIndex`, `FuzzyIndex`, parser) plus the tuning knobs from
//! `ResolverConfig`. `Clone` is cheap (`Arc`-backed) so the same service
//! instance can be shared across the web layer's worker tasks.

use std::sync::Arc;

use crate::canonical::CanonicalIndex;
use crate::config::ResolverConfig;
use crate::errors::AppResult;
use crate::fuzzy::FuzzyIndex;
use crate::models::Response;
use crate::parser::NameParser;
use crate::resolver::Resolver;

#[derive(Clone)]
pub struct ResolverService {
    canonical_index: Arc<CanonicalIndex>,
    fuzzy_index: Arc<dyn FuzzyIndex>,
    parser: Arc<NameParser>,
    config: ResolverConfig,
}

impl ResolverService {
    pub fn new(
        canonical_index: CanonicalIndex,
        fuzzy_index: Arc<dyn FuzzyIndex>,
        parser: NameParser,
        config: ResolverConfig,
    ) -> Self {
        Self {
            canonical_index: Arc::new(canonical_index),
            fuzzy_index,
            parser: Arc::new(parser),
            config,
        }
    }

    /// Resolve a batch of raw name strings.
    ///
    /// Runs inline when the index is small; offloads to a blocking task
    /// when the index is at or above `config.blocking_threshold`, so a large
    /// synchronous scan never starves the async reactor. Fails if the
    /// configured `FuzzyIndex` backend's `try_find_matches` returns `Err`
    /// for some probed split.
    pub async fn resolve(
        &self,
        names: Vec<String>,
        data_source_ids: Vec<i64>,
        advanced: bool,
    ) -> AppResult<Vec<Response>> {
        if self.canonical_index.len() < self.config.blocking_threshold {
            self.resolve_inline(&names, &data_source_ids, advanced)
        } else {
            let canonical_index = Arc::clone(&self.canonical_index);
            let fuzzy_index = Arc::clone(&self.fuzzy_index);
            let parser = Arc::clone(&self.parser);
            tokio::task::spawn_blocking(move || {
                let resolver = Resolver::new(&canonical_index, fuzzy_index.as_ref(), &parser);
                resolver.resolve(&names, &data_source_ids, advanced)
            })
            .await
            .expect("resolver worker task panicked")
            .map_err(Into::into)
        }
    }

    fn resolve_inline(
        &self,
        names: &[String],
        data_source_ids: &[i64],
        advanced: bool,
    ) -> AppResult<Vec<Response>> {
        let resolver = Resolver::new(&self.canonical_index, self.fuzzy_index.as_ref(), &self.parser);
        resolver.resolve(names, data_source_ids, advanced).map_err(Into::into)
    }

    pub fn index_len(&self) -> usize {
        self.canonical_index.len()
    }
}
