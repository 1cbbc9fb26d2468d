//! Loads a `CanonicalIndex` from a plain-text fixture file
//!
//! Persistence of the index itself is an explicit non-goal — this is just
//! the minimal on-disk format needed to stand the service up with a real
//! name set instead of the coded demo fixture. Format: one canonical name
//! per line, followed by a tab and a comma-separated list of data-source
//! ids, e.g. `homo sapiens\t1,2`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::canonical::CanonicalIndex;

pub fn load_tsv(path: &Path) -> Result<CanonicalIndex> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading canonical index file {}", path.display()))?;
    Ok(CanonicalIndex::from_entries(parse_lines(&contents)))
}

fn parse_lines(contents: &str) -> Vec<(String, HashSet<i64>)> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let (name, sources) = line.split_once('\t')?;
            let sources = sources
                .split(',')
                .filter_map(|s| s.trim().parse::<i64>().ok())
                .collect();
            Some((name.trim().to_string(), sources))
        })
        .collect()
}

/// A small, coded fixture for demo/dev runs when no file is configured.
pub fn demo_fixture() -> CanonicalIndex {
    CanonicalIndex::from_entries([
        ("homo sapiens".to_string(), HashSet::from([1])),
        ("homo".to_string(), HashSet::from([1, 2])),
        ("felis catus".to_string(), HashSet::from([3])),
    ])
}
