//! `sitesearch_core` — portable site-name autocomplete kernel.
//!
//! No file or network I/O; compiles to `wasm32-unknown-unknown`. Hosts
//! supply data through [`source::RecordSource`] and render through
//! [`widget::Presenter`] / [`widget::Navigator`].
//!
//! Modules:
//! - `record`   — record type, sanitization, built-in fallback list
//! - `store`    — name-sorted records with case-insensitive lookup
//! - `trie`     — character trie for prefix queries
//! - `snapshot` — store + index generation and its shared slot
//! - `resolve`  — submitted text → URL
//! - `session`  — suggestion/selection state
//! - `widget`   — search box event handlers
//! - `source`   — record source trait and total `load`
//! - `config`   — widget tunables

pub mod config;
pub mod record;
pub mod resolve;
pub mod session;
pub mod snapshot;
pub mod source;
pub mod store;
pub mod trie;
pub mod widget;

pub use config::WidgetConfig;
pub use record::Record;
pub use snapshot::{SharedSnapshot, Snapshot};
pub use store::RecordStore;
pub use trie::PrefixIndex;
pub use widget::{Navigator, Presenter, SearchBox};
