//! Site records and the sanitization boundary.
//!
//! Every record entering a store passes through [`sanitize`]. Raw data is
//! untyped JSON; anything that does not match the `{name, domain}` schema is
//! dropped here and nowhere else.

use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Built-in directory used whenever no valid external data is available.
const FALLBACK_SITES: [(&str, &str); 8] = [
    ("amazon", "amazon.com"),
    ("apple", "apple.com"),
    ("airbnb", "airbnb.com"),
    ("google", "google.com"),
    ("github", "github.com"),
    ("reddit", "reddit.com"),
    ("youtube", "youtube.com"),
    ("wikipedia", "wikipedia.org"),
];

/// A searchable site: lowercase, trimmed, non-empty `name` and `domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub domain: String,
}

impl Record {
    /// Normalize a raw pair. Returns `None` if either field trims to empty.
    pub fn new(name: &str, domain: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        let domain = domain.trim().to_lowercase();
        if name.is_empty() || domain.is_empty() {
            return None;
        }
        Some(Record { name, domain })
    }
}

/// Raw entry shape accepted from a data source.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    domain: String,
}

/// The fixed fallback directory, sorted by name.
pub fn fallback_records() -> Vec<Record> {
    let mut records: Vec<Record> = FALLBACK_SITES
        .iter()
        .filter_map(|(name, domain)| Record::new(name, domain))
        .collect();
    sort_by_name(&mut records);
    records
}

/// Validate, normalize, dedupe and sort raw source data.
///
/// Non-array input, or an array with no valid entries, yields
/// [`fallback_records`]. Duplicate names keep the first occurrence in input
/// order.
pub fn sanitize(raw: &Value) -> Vec<Record> {
    let Some(entries) = raw.as_array() else {
        debug!("record data is not an array; using fallback list");
        return fallback_records();
    };

    let mut seen = AHashSet::with_capacity(entries.len());
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let Ok(fields) = RawRecord::deserialize(entry) else {
            debug!("dropping malformed record entry: {}", entry);
            continue;
        };
        let Some(record) = Record::new(&fields.name, &fields.domain) else {
            debug!("dropping record with empty field: {}", entry);
            continue;
        };
        if !seen.insert(record.name.clone()) {
            debug!("dropping duplicate record name {:?}", record.name);
            continue;
        }
        records.push(record);
    }

    if records.is_empty() {
        debug!("no valid records in source data; using fallback list");
        return fallback_records();
    }

    sort_by_name(&mut records);
    records
}

/// Stable sort by name in code-point order.
fn sort_by_name(records: &mut [Record]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn fallback_is_sorted_and_complete() {
        let records = fallback_records();
        assert_eq!(records.len(), 8);
        assert_eq!(
            names(&records),
            vec![
                "airbnb",
                "amazon",
                "apple",
                "github",
                "google",
                "reddit",
                "wikipedia",
                "youtube"
            ]
        );
    }

    #[test]
    fn record_new_normalizes() {
        let record = Record::new("  GitHub ", " GitHub.COM").unwrap();
        assert_eq!(record.name, "github");
        assert_eq!(record.domain, "github.com");
        assert!(Record::new("   ", "x.com").is_none());
        assert!(Record::new("x", "").is_none());
    }

    #[test]
    fn non_list_inputs_fall_back() {
        let fallback = fallback_records();
        assert_eq!(sanitize(&json!([])), fallback);
        assert_eq!(sanitize(&Value::Null), fallback);
        assert_eq!(sanitize(&json!("not a list")), fallback);
        assert_eq!(sanitize(&json!({"name": "x", "domain": "x.com"})), fallback);
    }

    #[test]
    fn missing_domain_falls_back() {
        assert_eq!(sanitize(&json!([{"name": "x"}])), fallback_records());
    }

    #[test]
    fn malformed_entries_are_dropped() {
        let raw = json!([
            {"name": "Zeta", "domain": "zeta.io"},
            {"name": 42, "domain": "num.io"},
            {"domain": "nameless.io"},
            "bare string",
            null,
            {"name": "  ", "domain": "blank.io"},
            {"name": "Alpha ", "domain": " ALPHA.dev "},
        ]);
        let records = sanitize(&raw);
        assert_eq!(
            records,
            vec![
                Record {
                    name: "alpha".into(),
                    domain: "alpha.dev".into()
                },
                Record {
                    name: "zeta".into(),
                    domain: "zeta.io".into()
                },
            ]
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let raw = json!([{"name": "x", "domain": "x.com", "rank": 3}]);
        assert_eq!(names(&sanitize(&raw)), vec!["x"]);
    }

    #[test]
    fn duplicate_names_keep_first() {
        let raw = json!([
            {"name": "Docs", "domain": "first.example"},
            {"name": "docs ", "domain": "second.example"},
        ]);
        let records = sanitize(&raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].domain, "first.example");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let raw = json!([
            {"name": "b", "domain": "B.com"},
            {"name": "A", "domain": "a.com"},
            {"name": "a", "domain": "dup.com"},
        ]);
        let once = sanitize(&raw);
        let again = sanitize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, again);
    }
}
