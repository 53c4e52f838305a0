use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::core::Record;

/// Roster names sharing one key value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateBlock {
    names: Vec<String>,
}

impl CandidateBlock {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Hard partition of a roster by exact key.
///
/// Built once from the full record collection and read-only afterwards; every
/// record lands in exactly one block, under its own key. Rebuild when the
/// roster changes.
#[derive(Debug, Clone)]
pub struct BlockedIndex<K> {
    blocks: HashMap<K, CandidateBlock>,
    record_count: usize,
}

impl<K: Eq + Hash> BlockedIndex<K> {
    /// Group records by key
    pub fn build<I, R>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Record<K>>,
    {
        let mut blocks: HashMap<K, CandidateBlock> = HashMap::new();
        let mut record_count = 0;

        for record in records {
            let Record { name, key } = record.into();
            blocks.entry(key).or_default().names.push(name);
            record_count += 1;
        }

        tracing::debug!(blocks = blocks.len(), records = record_count, "built blocked index");

        Self {
            blocks,
            record_count,
        }
    }

    /// Candidate block for `key`, if any record carries it
    pub fn lookup<Q>(&self, key: &Q) -> Option<&CandidateBlock>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.blocks.get(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of records indexed across all blocks
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.blocks.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &CandidateBlock)> {
        self.blocks.iter()
    }
}

impl<K: Eq + Hash> PartialEq for BlockedIndex<K> {
    fn eq(&self, other: &Self) -> bool {
        self.record_count == other.record_count && self.blocks == other.blocks
    }
}

impl<K: Eq + Hash> Eq for BlockedIndex<K> {}

impl<K, R> FromIterator<R> for BlockedIndex<K>
where
    K: Eq + Hash,
    R: Into<Record<K>>,
{
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::build(iter)
    }
}
