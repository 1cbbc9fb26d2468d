//! Wire types exchanged between the resolver core and its callers
//!
//! Plain, concrete serde-serializable structs/enums living next to
//! everything that produces them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One response per input name. `results` is empty when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub input_uuid: Uuid,
    pub results: Vec<MatchResult>,
}

impl Response {
    pub fn empty(input_uuid: Uuid) -> Self {
        Self {
            input_uuid,
            results: Vec::new(),
        }
    }
}

/// A single matched name plus the classification that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name_matched: Name,
    pub match_kind: MatchKind,
}

/// A name paired with its deterministically derived identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub uuid: Uuid,
    pub value: String,
}

/// Tagged union of match kinds.
///
/// Only `CanonicalMatch` is produced by this core. The enum is written so
/// sibling variants (e.g. a future `FuzzySynonymMatch`) can be added without
/// breaking the wire shape of existing consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MatchKind {
    CanonicalMatch {
        #[serde(default)]
        partial: bool,
        #[serde(default)]
        stem_edit_distance: u32,
        #[serde(default)]
        verbatim_edit_distance: u32,
    },
}

impl MatchKind {
    pub fn exact(partial: bool) -> Self {
        MatchKind::CanonicalMatch {
            partial,
            stem_edit_distance: 0,
            verbatim_edit_distance: 0,
        }
    }

    pub fn fuzzy(partial: bool, stem_edit_distance: u32, verbatim_edit_distance: u32) -> Self {
        MatchKind::CanonicalMatch {
            partial,
            stem_edit_distance,
            verbatim_edit_distance,
        }
    }
}

/// A candidate returned by a `FuzzyIndex` backend for one queried term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub term: String,
    #[serde(default)]
    pub stem_edit_distance: Option<u32>,
    #[serde(default)]
    pub verbatim_edit_distance: Option<u32>,
}

impl Candidate {
    pub fn new(term: impl Into<String>, stem: u32, verbatim: u32) -> Self {
        Self {
            term: term.into(),
            stem_edit_distance: Some(stem),
            verbatim_edit_distance: Some(verbatim),
        }
    }

    pub fn stem_distance_or_zero(&self) -> u32 {
        self.stem_edit_distance.unwrap_or(0)
    }

    pub fn verbatim_distance_or_zero(&self) -> u32 {
        self.verbatim_edit_distance.unwrap_or(0)
    }
}

/// Request body for `POST /api/v1/resolve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveRequest {
    pub names: Vec<String>,
    #[serde(default)]
    pub data_source_ids: Vec<i64>,
    #[serde(default)]
    pub advanced: bool,
}
