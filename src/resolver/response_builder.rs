//! ResponseBuilder: the single place that mints `MatchResult`s
//!
//! Centralizing these constructors guarantees the UUID and `partial` flag
//! invariants hold everywhere a `MatchResult` is produced, instead of at
//! each call site in the resolver.

use crate::models::{Candidate, MatchKind, MatchResult, Name};
use crate::split::NameSplit;
use crate::uuid_gen::UuidGen;

/// An exact hit against `split.partial()` itself.
pub fn exact_hit(split: &NameSplit) -> MatchResult {
    MatchResult {
        name_matched: Name {
            uuid: UuidGen::generate(split.partial()),
            value: split.partial().to_string(),
        },
        match_kind: MatchKind::exact(!split.is_original()),
    }
}

/// A genus-only degraded hit.
///
/// `partial` is pinned to `false` here even though the originating split
/// was reached via `shorten` — this is an intentional wire-contract quirk,
/// not a bug.
pub fn genus_only_hit(split: &NameSplit) -> MatchResult {
    MatchResult {
        name_matched: Name {
            uuid: UuidGen::generate(split.partial()),
            value: split.partial().to_string(),
        },
        match_kind: MatchKind::exact(false),
    }
}

/// One `MatchResult` per fuzzy candidate, preserving candidate order.
pub fn fuzzy_hits(split: &NameSplit, candidates: &[Candidate]) -> Vec<MatchResult> {
    candidates
        .iter()
        .map(|candidate| MatchResult {
            name_matched: Name {
                uuid: UuidGen::generate(&candidate.term),
                value: candidate.term.clone(),
            },
            match_kind: MatchKind::fuzzy(
                !split.is_original(),
                candidate.stem_distance_or_zero(),
                candidate.verbatim_distance_or_zero(),
            ),
        })
        .collect()
}
