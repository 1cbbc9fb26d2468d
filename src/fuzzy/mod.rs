//! FuzzyIndex: the approximate-match backend
//!
//! A trait so the resolver core stays decoupled from any one implementation
//! and treats whatever closeness notion a backend applies as authoritative,
//! plus a default `InMemoryFuzzyIndex` built on a straightforward
//! Levenshtein scan.

use std::collections::HashSet;

use crate::errors::types::FuzzyError;
use crate::models::Candidate;

/// An approximate-match backend over canonical name strings.
pub trait FuzzyIndex: Send + Sync {
    /// Find approximate matches for `term`, pre-filtered by `filter`.
    ///
    /// An empty `filter` means "accept any source". Implementations own the
    /// definition of "close"; the resolver treats the returned list (and its
    /// order) as authoritative.
    fn find_matches(&self, term: &str, filter: &HashSet<i64>) -> Vec<Candidate>;

    /// Fallible variant for backends that want to surface hard failures
    /// (timeouts, a downed search cluster) instead of silently returning no
    /// candidates. Defaults to wrapping `find_matches` in `Ok`, so the common
    /// in-memory case pays nothing for this.
    fn try_find_matches(
        &self,
        term: &str,
        filter: &HashSet<i64>,
    ) -> Result<Vec<Candidate>, FuzzyError> {
        Ok(self.find_matches(term, filter))
    }
}

/// An in-memory `FuzzyIndex` scanning the canonical term set with
/// Levenshtein distance over both the verbatim string and a cheap stem.
///
/// The stem here is a trailing-vowel strip, not a real linguistic stemmer —
/// taxonomic nomenclature's Latinate endings vary enough (-us/-a/-um/-ensis)
/// that a light suffix strip catches most of the benefit without pulling in
/// a dedicated stemming crate for a non-goal this core doesn't need to be
/// precise about (see DESIGN.md).
pub struct InMemoryFuzzyIndex {
    terms: Vec<(String, HashSet<i64>)>,
    max_edit_distance: u32,
    max_candidates: usize,
}

impl InMemoryFuzzyIndex {
    pub fn new<I>(entries: I, max_edit_distance: u32, max_candidates: usize) -> Self
    where
        I: IntoIterator<Item = (String, HashSet<i64>)>,
    {
        Self {
            terms: entries.into_iter().collect(),
            max_edit_distance,
            max_candidates,
        }
    }

    fn stem(s: &str) -> &str {
        s.trim_end_matches(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 's' | 'm'))
    }
}

impl FuzzyIndex for InMemoryFuzzyIndex {
    fn find_matches(&self, term: &str, filter: &HashSet<i64>) -> Vec<Candidate> {
        if term.is_empty() {
            return Vec::new();
        }

        let query_stem = Self::stem(term);
        let mut scored: Vec<(u32, u32, &str)> = self
            .terms
            .iter()
            .filter(|(_, sources)| {
                filter.is_empty() || sources.iter().any(|s| filter.contains(s))
            })
            .filter_map(|(candidate_term, _)| {
                let verbatim = strsim::levenshtein(term, candidate_term) as u32;
                if verbatim > self.max_edit_distance {
                    return None;
                }
                let stem = strsim::levenshtein(query_stem, Self::stem(candidate_term)) as u32;
                Some((verbatim, stem, candidate_term.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(b.2)));
        scored.truncate(self.max_candidates);

        scored
            .into_iter()
            .map(|(verbatim, stem, candidate_term)| Candidate::new(candidate_term, stem, verbatim))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> InMemoryFuzzyIndex {
        InMemoryFuzzyIndex::new(
            [
                ("homo sapiens".to_string(), HashSet::from([1])),
                ("felis catus".to_string(), HashSet::from([3])),
            ],
            6,
            5,
        )
    }

    #[test]
    fn finds_close_match_within_threshold() {
        let idx = index();
        let matches = idx.find_matches("homo sapiens fooensis", &HashSet::new());
        assert!(matches.iter().any(|c| c.term == "homo sapiens"));
    }

    #[test]
    fn respects_data_source_filter() {
        let idx = index();
        let matches = idx.find_matches("homo sapiens fooensis", &HashSet::from([3]));
        assert!(!matches.iter().any(|c| c.term == "homo sapiens"));
    }

    #[test]
    fn empty_term_yields_no_candidates() {
        let idx = index();
        assert!(idx.find_matches("", &HashSet::new()).is_empty());
    }

    #[test]
    fn caps_candidate_count() {
        let many: Vec<(String, HashSet<i64>)> = (0..20)
            .map(|i| (format!("homo sapien{i}"), HashSet::from([1])))
            .collect();
        let idx = InMemoryFuzzyIndex::new(many, 10, 3);
        let matches = idx.find_matches("homo sapiens", &HashSet::new());
        assert!(matches.len() <= 3);
    }
}
