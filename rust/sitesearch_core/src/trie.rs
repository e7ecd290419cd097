//! Character trie over record names for keystroke-time prefix lookup.
//!
//! Nodes live in a flat arena and refer to each other by `u32` index. Each
//! node keeps its children in a `BTreeMap<char, u32>`, so traversal visits
//! children in ascending code-point order. Over a name-sorted store this
//! yields matches in store order.
//!
//! A query costs O(prefix length) to descend plus O(visited nodes) to
//! collect, and stops as soon as `limit` matches are found.

use std::collections::BTreeMap;

use log::debug;

use crate::record::Record;

/// Root node index in the arena.
const ROOT: u32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TrieNode {
    /// Child node index per next character.
    children: BTreeMap<char, u32>,
    /// Positions of records whose full name ends at this node.
    terminals: Vec<u32>,
}

/// Prefix index over one record snapshot.
///
/// Holds positions only; pass the same record slice it was built from to
/// [`PrefixIndex::query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixIndex {
    nodes: Vec<TrieNode>,
    record_count: u32,
}

impl PrefixIndex {
    /// An index with no entries.
    pub fn empty() -> Self {
        PrefixIndex {
            nodes: vec![TrieNode::default()],
            record_count: 0,
        }
    }

    /// Build an index over `records`, inserting in slice order.
    pub fn build(records: &[Record]) -> Self {
        let mut index = Self::empty();
        for (pos, record) in records.iter().enumerate() {
            index.insert(&record.name, pos as u32);
        }
        index.record_count = records.len() as u32;
        debug!(
            "built prefix index: {} records, {} nodes",
            index.record_count,
            index.nodes.len()
        );
        index
    }

    fn insert(&mut self, name: &str, pos: u32) {
        let mut node = ROOT;
        for ch in name.chars() {
            node = match self.nodes[node as usize].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node as usize].children.insert(ch, child);
                    child
                }
            };
        }
        self.nodes[node as usize].terminals.push(pos);
    }

    /// Node reached by following `prefix` from the root, if any.
    fn descend(&self, prefix: &str) -> Option<u32> {
        let mut node = ROOT;
        for ch in prefix.chars() {
            node = *self.nodes[node as usize].children.get(&ch)?;
        }
        Some(node)
    }

    /// Record positions whose name starts with `prefix`, up to `limit`.
    ///
    /// `prefix` is lowercased here. Every position is checked against
    /// `records` with a direct `starts_with` before it is returned.
    pub fn positions(&self, records: &[Record], prefix: &str, limit: usize) -> Vec<u32> {
        let prefix = prefix.to_lowercase();
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }
        let Some(start) = self.descend(&prefix) else {
            return Vec::new();
        };

        let mut found = Vec::with_capacity(limit.min(self.record_count as usize));
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            let node = &self.nodes[node as usize];
            for &pos in &node.terminals {
                let matches = records
                    .get(pos as usize)
                    .is_some_and(|r| r.name.starts_with(prefix.as_str()));
                if !matches {
                    continue;
                }
                found.push(pos);
                if found.len() >= limit {
                    return found;
                }
            }
            // Reverse so the smallest character is popped first.
            stack.extend(node.children.values().rev().copied());
        }
        found
    }

    /// Records whose name starts with `prefix`, in store order, up to `limit`.
    pub fn query<'a>(&self, records: &'a [Record], prefix: &str, limit: usize) -> Vec<&'a Record> {
        self.positions(records, prefix, limit)
            .into_iter()
            .filter_map(|pos| records.get(pos as usize))
            .collect()
    }

    /// Number of records indexed.
    pub fn len(&self) -> usize {
        self.record_count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::empty()
    }
}
