//! ExactClassifier: partitions a batch of splits for one resolver pass
//!
//! One pass produces four disjoint groups from a batch of `NameSplit`:
//! genus-only degraded candidates, exact index hits, a queue of splits that
//! need a fuzzy probe, and splits that have been shortened down to nothing
//! left to try.

use std::collections::HashSet;

use crate::canonical::CanonicalIndex;
use crate::split::NameSplit;

pub struct Classification {
    pub genus_only: Vec<NameSplit>,
    pub exact_hit: Vec<NameSplit>,
    pub fuzzy_queue: Vec<NameSplit>,
    /// Splits with nothing left to shorten (`size() == 0`). Terminal: the
    /// caller must resolve these to an empty response directly rather than
    /// probing or re-shortening them, since `shorten()` is a no-op at
    /// `size() == 0` and re-queuing would loop forever.
    pub exhausted: Vec<NameSplit>,
}

pub struct ExactClassifier;

impl ExactClassifier {
    /// Classify `batch` against `index`, honoring the optional `filter`.
    ///
    /// Tie-break: a uninomial split reached through `shorten` always routes
    /// to `genus_only`, even when it would also intersect the index
    /// exactly — a shortened-to-genus result is reported as a degraded
    /// match, never folded into the ordinary exact-hit path.
    pub fn classify(
        batch: Vec<NameSplit>,
        filter: &HashSet<i64>,
        index: &CanonicalIndex,
    ) -> Classification {
        let mut genus_only = Vec::new();
        let mut exact_hit = Vec::new();
        let mut fuzzy_queue = Vec::new();
        let mut exhausted = Vec::new();

        for split in batch {
            if split.size() == 0 {
                exhausted.push(split);
                continue;
            }

            if split.is_uninomial() && !split.is_original() {
                genus_only.push(split);
                continue;
            }

            // Every remaining split has size() >= 1. If size() == 1 it must
            // be original (the shortened-uninomial case was routed to
            // genus_only above), so every split reaching here is eligible
            // for an exact lookup.
            if index.intersects(split.partial(), filter) {
                exact_hit.push(split);
            } else {
                fuzzy_queue.push(split);
            }
        }

        Classification {
            genus_only,
            exact_hit,
            fuzzy_queue,
            exhausted,
        }
    }
}
