//! Background directory load.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use sitesearch_core::source::{load, RecordSource};
use sitesearch_core::{RecordStore, SharedSnapshot};

/// Load records from `source` on a worker thread and install them into
/// `shared` once. Queries keep using the current snapshot until then.
pub fn spawn_load<S>(shared: Arc<SharedSnapshot>, source: S) -> std::io::Result<JoinHandle<()>>
where
    S: RecordSource + Send + 'static,
{
    thread::Builder::new()
        .name("sitesearch-load".to_string())
        .spawn(move || load_into(&shared, &source))
}

/// Load synchronously and install.
pub fn load_into<S: RecordSource + ?Sized>(shared: &SharedSnapshot, source: &S) {
    shared.install(RecordStore::from_sanitized(load(source)));
}
