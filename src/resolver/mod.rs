//! Resolver: the recursive-shortening state machine
//!
//! `resolve_from_partials` drains an explicit worklist rather than using
//! call-stack recursion: it composes better with batching, and the
//! word-count bound on recursion depth (typically <= 8) makes either form
//! trivially safe. Each pass strictly shrinks the worklist: every split
//! that cannot be classified as a hit or re-queued for fuzzy probing is
//! either shortened to a smaller split or routed to a terminal bucket, so
//! the loop always reaches an empty worklist.

mod fuzzy_probe;
pub mod response_builder;

use std::collections::HashSet;
use std::sync::Arc;

use crate::canonical::CanonicalIndex;
use crate::classifier::ExactClassifier;
use crate::errors::types::FuzzyError;
use crate::fuzzy::FuzzyIndex;
use crate::models::Response;
use crate::parser::NameParser;
use crate::split::NameSplit;

use fuzzy_probe::FuzzyProbe;

/// Orchestrates name resolution over a `CanonicalIndex` and a `FuzzyIndex`.
///
/// Constructed explicitly with its two collaborators — no process-wide
/// singleton.
pub struct Resolver<'a> {
    canonical_index: &'a CanonicalIndex,
    fuzzy_index: &'a dyn FuzzyIndex,
    parser: &'a NameParser,
}

impl<'a> Resolver<'a> {
    pub fn new(
        canonical_index: &'a CanonicalIndex,
        fuzzy_index: &'a dyn FuzzyIndex,
        parser: &'a NameParser,
    ) -> Self {
        Self {
            canonical_index,
            fuzzy_index,
            parser,
        }
    }

    /// Top-level entry point: parse, resolve, and apply the
    /// advanced/non-advanced post-filter.
    ///
    /// Fails only if the `FuzzyIndex` backend's `try_find_matches` returns
    /// `Err` for some probed split; the common infallible case never
    /// constructs one.
    pub fn resolve(
        &self,
        names: &[String],
        data_source_ids: &[i64],
        advanced: bool,
    ) -> Result<Vec<Response>, FuzzyError> {
        let parsed = self.parser.parse_all(names);

        let mut parse_failures = Vec::new();
        let mut splits = Vec::new();
        for p in parsed {
            if p.canonized().is_some() {
                splits.push(NameSplit::from_parsed(p));
            } else {
                parse_failures.push(Response::empty(p.input_uuid()));
            }
        }

        let filter: HashSet<i64> = data_source_ids.iter().copied().collect();
        let mut responses = self.resolve_from_partials(splits, &filter, advanced)?;
        responses.extend(parse_failures);

        if !advanced {
            for response in &mut responses {
                response.results.retain(|r| {
                    let crate::models::MatchKind::CanonicalMatch {
                        stem_edit_distance,
                        verbatim_edit_distance,
                        ..
                    } = &r.match_kind;
                    *stem_edit_distance != 0 || *verbatim_edit_distance != 0
                });
            }
        }

        Ok(responses)
    }

    /// One full worklist pass (and, when `advanced`, every subsequent pass
    /// over shortened splits) over `batch`.
    pub fn resolve_from_partials(
        &self,
        batch: Vec<NameSplit>,
        filter: &HashSet<i64>,
        advanced: bool,
    ) -> Result<Vec<Response>, FuzzyError> {
        let original_len = batch.len();
        let mut responses = Vec::with_capacity(original_len);
        let mut worklist = batch;

        while !worklist.is_empty() {
            let classification = ExactClassifier::classify(worklist, filter, self.canonical_index);

            for split in &classification.genus_only {
                responses.push(self.genus_only_response(split, filter));
            }

            for split in &classification.exact_hit {
                responses.push(Response {
                    input_uuid: split.parsed().input_uuid(),
                    results: vec![response_builder::exact_hit(split)],
                });
            }

            for split in &classification.exhausted {
                responses.push(Response::empty(split.parsed().input_uuid()));
            }

            let probed = FuzzyProbe::probe(classification.fuzzy_queue, filter, self.fuzzy_index)?;
            let (useful, no_useful) =
                FuzzyProbe::partition_useful(probed, filter, self.canonical_index);

            for entry in &useful {
                responses.push(Response {
                    input_uuid: entry.split.parsed().input_uuid(),
                    results: response_builder::fuzzy_hits(&entry.split, &entry.candidates),
                });
            }

            if advanced {
                worklist = no_useful.into_iter().map(|entry| entry.split.shorten()).collect();
            } else {
                for entry in no_useful {
                    responses.push(Response::empty(entry.split.parsed().input_uuid()));
                }
                worklist = Vec::new();
            }
        }

        assert_eq!(
            responses.len(),
            original_len,
            "internal consistency violation: response count diverged from batch size"
        );
        Ok(responses)
    }

    fn genus_only_response(&self, split: &NameSplit, filter: &HashSet<i64>) -> Response {
        if self.canonical_index.intersects(split.partial(), filter) {
            Response {
                input_uuid: split.parsed().input_uuid(),
                results: vec![response_builder::genus_only_hit(split)],
            }
        } else {
            Response::empty(split.parsed().input_uuid())
        }
    }
}

/// Convenience constructor used by services that own their collaborators
/// behind `Arc` rather than plain references.
pub fn resolve_owned(
    canonical_index: &CanonicalIndex,
    fuzzy_index: &Arc<dyn FuzzyIndex>,
    parser: &NameParser,
    names: &[String],
    data_source_ids: &[i64],
    advanced: bool,
) -> Result<Vec<Response>, FuzzyError> {
    let resolver = Resolver::new(canonical_index, fuzzy_index.as_ref(), parser);
    resolver.resolve(names, data_source_ids, advanced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::InMemoryFuzzyIndex;
    use crate::models::MatchKind;

    fn fixture() -> (CanonicalIndex, InMemoryFuzzyIndex, NameParser) {
        let canonical = CanonicalIndex::from_entries([
            ("homo sapiens".to_string(), HashSet::from([1])),
            ("homo".to_string(), HashSet::from([1, 2])),
            ("felis catus".to_string(), HashSet::from([3])),
        ]);
        let fuzzy = InMemoryFuzzyIndex::new(
            [
                ("homo sapiens".to_string(), HashSet::from([1])),
                ("homo".to_string(), HashSet::from([1, 2])),
                ("felis catus".to_string(), HashSet::from([3])),
            ],
            6,
            5,
        );
        (canonical, fuzzy, NameParser::new())
    }

    // S1
    #[test]
    fn exact_binomial_hit_advanced() {
        let (canonical, fuzzy, parser) = fixture();
        let resolver = Resolver::new(&canonical, &fuzzy, &parser);
        let responses = resolver.resolve(&["Homo sapiens".to_string()], &[], true).unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].results.len(), 1);
        assert_eq!(responses[0].results[0].name_matched.value, "homo sapiens");
        match &responses[0].results[0].match_kind {
            MatchKind::CanonicalMatch {
                partial,
                stem_edit_distance,
                verbatim_edit_distance,
            } => {
                assert!(!partial);
                assert_eq!(*stem_edit_distance, 0);
                assert_eq!(*verbatim_edit_distance, 0);
            }
        }
    }

    // S2
    #[test]
    fn exact_hit_suppressed_when_not_advanced() {
        let (canonical, fuzzy, parser) = fixture();
        let resolver = Resolver::new(&canonical, &fuzzy, &parser);
        let responses = resolver.resolve(&["Homo sapiens".to_string()], &[], false).unwrap();
        assert_eq!(responses.len(), 1);
        assert!(responses[0].results.is_empty());
    }

    // S3
    #[test]
    fn shortens_to_exact_hit_when_fuzzy_finds_nothing_useful() {
        let canonical = CanonicalIndex::from_entries([("homo sapiens".to_string(), HashSet::from([1]))]);
        // A fuzzy backend that never returns anything, forcing the worklist
        // to shorten down to the exact binomial.
        struct EmptyFuzzy;
        impl FuzzyIndex for EmptyFuzzy {
            fn find_matches(&self, _term: &str, _filter: &HashSet<i64>) -> Vec<crate::models::Candidate> {
                Vec::new()
            }
        }
        let fuzzy = EmptyFuzzy;
        let parser = NameParser::new();
        let resolver = Resolver::new(&canonical, &fuzzy, &parser);
        let responses = resolver
            .resolve(&["Homo sapiens fooensis".to_string()], &[], true)
            .unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].results.len(), 1);
        assert_eq!(responses[0].results[0].name_matched.value, "homo sapiens");
        match &responses[0].results[0].match_kind {
            MatchKind::CanonicalMatch { partial, .. } => assert!(*partial),
        }
    }

    // S4
    #[test]
    fn no_shortening_without_advanced_yields_empty() {
        let canonical = CanonicalIndex::from_entries([("homo sapiens".to_string(), HashSet::from([1]))]);
        struct EmptyFuzzy;
        impl FuzzyIndex for EmptyFuzzy {
            fn find_matches(&self, _term: &str, _filter: &HashSet<i64>) -> Vec<crate::models::Candidate> {
                Vec::new()
            }
        }
        let fuzzy = EmptyFuzzy;
        let parser = NameParser::new();
        let resolver = Resolver::new(&canonical, &fuzzy, &parser);
        let responses = resolver
            .resolve(&["Homo sapiens fooensis".to_string()], &[], false)
            .unwrap();
        assert_eq!(responses.len(), 1);
        assert!(responses[0].results.is_empty());
    }

    // S5
    #[test]
    fn original_uninomial_hit() {
        let (canonical, fuzzy, parser) = fixture();
        let resolver = Resolver::new(&canonical, &fuzzy, &parser);
        let responses = resolver.resolve(&["Homo".to_string()], &[], true).unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].results.len(), 1);
        assert_eq!(responses[0].results[0].name_matched.value, "homo");
        match &responses[0].results[0].match_kind {
            MatchKind::CanonicalMatch { partial, .. } => assert!(!partial),
        }
    }

    // S6
    #[test]
    fn filter_excludes_source_and_fuzzy_finds_nothing() {
        let canonical = CanonicalIndex::from_entries([("homo sapiens".to_string(), HashSet::from([1]))]);
        struct EmptyFuzzy;
        impl FuzzyIndex for EmptyFuzzy {
            fn find_matches(&self, _term: &str, _filter: &HashSet<i64>) -> Vec<crate::models::Candidate> {
                Vec::new()
            }
        }
        let fuzzy = EmptyFuzzy;
        let parser = NameParser::new();
        let resolver = Resolver::new(&canonical, &fuzzy, &parser);
        let responses = resolver.resolve(&["Homo sapiens".to_string()], &[3], true).unwrap();
        assert_eq!(responses.len(), 1);
        assert!(responses[0].results.is_empty());
    }

    // S7
    #[test]
    fn fuzzy_hit_reports_distances_and_not_partial() {
        let canonical = CanonicalIndex::from_entries([("homo sapiens".to_string(), HashSet::from([1]))]);
        struct StubFuzzy;
        impl FuzzyIndex for StubFuzzy {
            fn find_matches(&self, _term: &str, _filter: &HashSet<i64>) -> Vec<crate::models::Candidate> {
                vec![crate::models::Candidate::new("homo sapiens", 5, 6)]
            }
        }
        let fuzzy = StubFuzzy;
        let parser = NameParser::new();
        let resolver = Resolver::new(&canonical, &fuzzy, &parser);
        let responses = resolver.resolve(&["Xyz qqq".to_string()], &[], true).unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].results.len(), 1);
        match &responses[0].results[0].match_kind {
            MatchKind::CanonicalMatch {
                partial,
                stem_edit_distance,
                verbatim_edit_distance,
            } => {
                assert!(!partial);
                assert_eq!(*stem_edit_distance, 5);
                assert_eq!(*verbatim_edit_distance, 6);
            }
        }
    }

    #[test]
    fn cardinality_holds_for_mixed_batch() {
        let (canonical, fuzzy, parser) = fixture();
        let resolver = Resolver::new(&canonical, &fuzzy, &parser);
        let names = vec![
            "Homo sapiens".to_string(),
            "Homo".to_string(),
            "Felis catus".to_string(),
            "".to_string(),
            "Xyz qqq".to_string(),
        ];
        let responses = resolver.resolve(&names, &[], true).unwrap();
        assert_eq!(responses.len(), names.len());
    }

    #[test]
    fn every_result_uuid_matches_uuid_gen() {
        let (canonical, fuzzy, parser) = fixture();
        let resolver = Resolver::new(&canonical, &fuzzy, &parser);
        let responses = resolver.resolve(&["Homo sapiens".to_string()], &[], true).unwrap();
        for response in &responses {
            for result in &response.results {
                assert_eq!(
                    result.name_matched.uuid,
                    crate::uuid_gen::UuidGen::generate(&result.name_matched.value)
                );
            }
        }
    }

    /// A uninomial that never exact-hits and that the fuzzy backend never
    /// finds anything for must still terminate: once `shorten()` reaches
    /// `size() == 0` the classifier routes it to `exhausted` instead of
    /// re-queuing it for another fuzzy probe, so the worklist empties out
    /// after a single shortening pass instead of looping forever.
    #[test]
    fn unmatched_uninomial_terminates_with_empty_response() {
        let (canonical, fuzzy, parser) = fixture();
        let resolver = Resolver::new(&canonical, &fuzzy, &parser);
        let responses = resolver
            .resolve(&["Qqqqqqqqqqqqqqqqqqqq".to_string()], &[], true)
            .unwrap();
        assert_eq!(responses.len(), 1);
        assert!(responses[0].results.is_empty());
    }
}
