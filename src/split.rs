//! NameSplit: a parsed name paired with its current working canonical substring
//!
//! `shorten` is the pure operation the resolver's worklist iterates with —
//! each pass drops one trailing token until either an exact hit lands or the
//! partial is exhausted.

use std::sync::Arc;

use crate::parser::ParsedName;

#[derive(Debug, Clone)]
pub struct NameSplit {
    parsed: Arc<ParsedName>,
    partial: String,
    is_original: bool,
}

impl NameSplit {
    /// Build the initial split for a successfully parsed name.
    ///
    /// Callers should only pass parses whose `canonized()` is non-empty; an
    /// empty canonical still produces a valid (inert) split whose `size()`
    /// is 0.
    pub fn from_parsed(parsed: Arc<ParsedName>) -> Self {
        let partial = parsed.canonized().unwrap_or("").to_string();
        Self {
            parsed,
            partial,
            is_original: true,
        }
    }

    pub fn parsed(&self) -> &Arc<ParsedName> {
        &self.parsed
    }

    pub fn partial(&self) -> &str {
        &self.partial
    }

    pub fn is_original(&self) -> bool {
        self.is_original
    }

    /// Word count of `partial`: 0 if empty, else space-count + 1.
    pub fn size(&self) -> usize {
        if self.partial.is_empty() {
            0
        } else {
            self.partial.matches(' ').count() + 1
        }
    }

    pub fn is_uninomial(&self) -> bool {
        self.size() == 1
    }

    /// Drop the final space-separated token, producing a new split.
    ///
    /// Pure: `self` is unchanged. When `size() <= 1` the result has an empty
    /// `partial`, since there is no further token to drop.
    pub fn shorten(&self) -> NameSplit {
        let new_partial = if self.size() > 1 {
            match self.partial.rfind(' ') {
                Some(idx) => self.partial[..idx].to_string(),
                None => String::new(),
            }
        } else {
            String::new()
        };
        NameSplit {
            parsed: Arc::clone(&self.parsed),
            partial: new_partial,
            is_original: false,
        }
    }
}
