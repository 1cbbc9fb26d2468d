//! FuzzyProbe: calls the fuzzy backend for a batch of splits
//!
//! Thin by design — it owns the "ask the backend, then decide if the answer
//! was useful under the filter" logic so `Resolver::resolve_from_partials`
//! reads as a sequence of named steps.

use std::collections::HashSet;

use crate::canonical::CanonicalIndex;
use crate::errors::types::FuzzyError;
use crate::fuzzy::FuzzyIndex;
use crate::models::Candidate;
use crate::split::NameSplit;

pub struct FuzzyProbe;

pub struct Probed {
    pub split: NameSplit,
    pub candidates: Vec<Candidate>,
}

impl FuzzyProbe {
    /// Probe every split in `queue`, pairing each with the candidates its
    /// backend call returned.
    ///
    /// Uses the fallible `try_find_matches`, so a backend that hits a hard
    /// failure (timeout, downed search cluster) short-circuits the whole
    /// batch instead of silently treating the failure as "no candidates".
    pub fn probe(
        queue: Vec<NameSplit>,
        filter: &HashSet<i64>,
        index: &dyn FuzzyIndex,
    ) -> Result<Vec<Probed>, FuzzyError> {
        queue
            .into_iter()
            .map(|split| {
                let candidates = index.try_find_matches(split.partial(), filter)?;
                Ok(Probed { split, candidates })
            })
            .collect()
    }

    /// Partition probed results into those with at least one candidate whose
    /// term survives `filter` in `canonical_index`, and those with none.
    pub fn partition_useful(
        probed: Vec<Probed>,
        filter: &HashSet<i64>,
        canonical_index: &CanonicalIndex,
    ) -> (Vec<Probed>, Vec<Probed>) {
        let mut useful = Vec::new();
        let mut no_useful = Vec::new();

        for mut entry in probed {
            entry
                .candidates
                .retain(|candidate| survives_filter(candidate, filter, canonical_index));
            if entry.candidates.is_empty() {
                no_useful.push(entry);
            } else {
                useful.push(entry);
            }
        }

        (useful, no_useful)
    }
}

fn survives_filter(
    candidate: &Candidate,
    filter: &HashSet<i64>,
    canonical_index: &CanonicalIndex,
) -> bool {
    canonical_index.intersects(&candidate.term, filter)
}
