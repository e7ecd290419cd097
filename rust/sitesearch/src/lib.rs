//! Host side of the site search box: record sources, navigation and a
//! terminal front end over `sitesearch_core`.

pub mod client;
pub mod error;
pub mod loader;
pub mod navigator;
pub mod presenter;
