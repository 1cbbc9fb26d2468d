//! Scientific name parsing: raw string -> canonical form
//!
//! A struct constructed once, with a `parse` method returning a value type
//! rather than a free function, so it is as easy to swap or mock as the
//! fuzzy backend.

use std::sync::Arc;

use regex::Regex;

use crate::uuid_gen::UuidGen;
use uuid::Uuid;

/// The parsed form of one raw input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    input_uuid: Uuid,
    raw: String,
    canonical: Option<String>,
}

impl ParsedName {
    /// The input identifier, deterministically derived from `raw`.
    pub fn input_uuid(&self) -> Uuid {
        self.input_uuid
    }

    /// The original, unparsed string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The canonical form, if parsing produced a non-empty one.
    pub fn canonized(&self) -> Option<&str> {
        self.canonical.as_deref()
    }
}

/// Canonicalizes raw scientific name strings.
///
/// Canonicalization here is deliberately simple: lowercase, strip bracketed
/// or parenthesized authority blocks, strip non-alphabetic punctuation, and
/// collapse whitespace. It is not a taxonomic parser (language
/// identification and authority arbitration are explicit non-goals) — it
/// just needs to be stable and total.
#[derive(Debug, Clone)]
pub struct NameParser {
    authority_block: Regex,
    non_letter_run: Regex,
    whitespace_run: Regex,
}

impl Default for NameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NameParser {
    pub fn new() -> Self {
        Self {
            authority_block: Regex::new(r"[\(\[][^\)\]]*[\)\]]").expect("valid regex"),
            non_letter_run: Regex::new(r"[^a-z\s-]+").expect("valid regex"),
            whitespace_run: Regex::new(r"\s+").expect("valid regex"),
        }
    }

    /// Parse a raw string into a `ParsedName`.
    ///
    /// Never fails: an unparseable or empty canonical just yields
    /// `canonized() == None` rather than an error.
    pub fn parse(&self, raw: &str) -> ParsedName {
        let canonical = self.canonicalize(raw);
        ParsedName {
            input_uuid: UuidGen::generate(raw),
            raw: raw.to_string(),
            canonical: if canonical.is_empty() {
                None
            } else {
                Some(canonical)
            },
        }
    }

    /// Parse a batch, returning one `ParsedName` per input in order.
    pub fn parse_all(&self, raws: &[String]) -> Vec<Arc<ParsedName>> {
        raws.iter().map(|raw| Arc::new(self.parse(raw))).collect()
    }

    fn canonicalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let without_authority = self.authority_block.replace_all(&lowered, " ");
        let letters_only = self.non_letter_run.replace_all(&without_authority, " ");
        let collapsed = self.whitespace_run.replace_all(letters_only.trim(), " ");
        collapsed.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_basic_binomial() {
        let parser = NameParser::new();
        let parsed = parser.parse("Homo sapiens");
        assert_eq!(parsed.canonized(), Some("homo sapiens"));
    }

    #[test]
    fn strips_author_block() {
        let parser = NameParser::new();
        let parsed = parser.parse("Homo sapiens (Linnaeus, 1758)");
        assert_eq!(parsed.canonized(), Some("homo sapiens"));
    }

    #[test]
    fn empty_input_has_no_canonical() {
        let parser = NameParser::new();
        let parsed = parser.parse("   ");
        assert_eq!(parsed.canonized(), None);
    }

    #[test]
    fn input_uuid_is_deterministic() {
        let parser = NameParser::new();
        let a = parser.parse("Homo sapiens");
        let b = parser.parse("Homo sapiens");
        assert_eq!(a.input_uuid(), b.input_uuid());
    }
}
