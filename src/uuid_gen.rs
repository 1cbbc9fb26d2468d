//! Deterministic UUID derivation from a string
//!
//! Uses the `uuid` crate's reserved URL namespace rather than inventing one,
//! so the mapping is reproducible without carrying crate-local magic bytes.

use uuid::Uuid;

/// Namespace-scoped, collision-resistant string -> UUID derivation.
pub struct UuidGen;

impl UuidGen {
    /// The namespace every generated UUID is scoped under.
    pub const NAMESPACE: Uuid = Uuid::NAMESPACE_URL;

    /// Deterministically derive a v5 UUID from `s`.
    ///
    /// Calling this twice with the same `s` always yields the same UUID,
    /// including across process restarts.
    pub fn generate(s: &str) -> Uuid {
        Uuid::new_v5(&Self::NAMESPACE, s.as_bytes())
    }
}
