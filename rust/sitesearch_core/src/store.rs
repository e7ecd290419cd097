//! Record store: the name-sorted record list plus an O(1) name lookup.

use ahash::AHashMap;

use crate::record::{fallback_records, sanitize, Record};

/// An immutable, name-sorted collection of records.
///
/// Positions (`u32`) into [`RecordStore::records`] are what the prefix index
/// stores; they are only meaningful for the store they were built from.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    by_name: AHashMap<String, u32>,
}

impl RecordStore {
    /// Build a store from records that already went through
    /// [`sanitize`](crate::record::sanitize).
    ///
    /// If a name repeats anyway, the first position is the one looked up.
    pub fn from_sanitized(records: Vec<Record>) -> Self {
        let mut by_name = AHashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            by_name.entry(record.name.clone()).or_insert(pos as u32);
        }
        RecordStore { records, by_name }
    }

    /// Sanitize raw JSON and build a store from it.
    pub fn from_json(raw: &serde_json::Value) -> Self {
        Self::from_sanitized(sanitize(raw))
    }

    /// The built-in fallback directory.
    pub fn fallback() -> Self {
        Self::from_sanitized(fallback_records())
    }

    /// Case-insensitive exact-name lookup.
    pub fn lookup(&self, name: &str) -> Option<&Record> {
        let key = name.to_lowercase();
        self.by_name
            .get(key.as_str())
            .map(|&pos| &self.records[pos as usize])
    }

    /// Record at `pos`, if in range.
    pub fn get(&self, pos: u32) -> Option<&Record> {
        self.records.get(pos as usize)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::fallback()
    }
}
