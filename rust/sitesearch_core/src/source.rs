//! Record sources and the total `load` operation.

use log::{info, warn};
use serde_json::Value;

use crate::record::{fallback_records, sanitize, Record};

/// Something that can hand back raw record data.
///
/// Implementations live with the host (HTTP, files). The payload is untyped
/// JSON; validation happens in [`sanitize`].
pub trait RecordSource {
    type Error: std::error::Error;

    /// Fetch the raw directory payload once.
    fn fetch(&self) -> Result<Value, Self::Error>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

/// Fetch and sanitize records. Never fails: any fetch error yields the
/// fallback list.
pub fn load<S: RecordSource + ?Sized>(source: &S) -> Vec<Record> {
    match source.fetch() {
        Ok(raw) => {
            let records = sanitize(&raw);
            info!("loaded {} records from {}", records.len(), source.describe());
            records
        }
        Err(e) => {
            warn!(
                "failed to load records from {}: {} (using fallback list)",
                source.describe(),
                e
            );
            fallback_records()
        }
    }
}
