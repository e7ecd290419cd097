//! Record sources backed by HTTP and the local filesystem.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL};
use serde_json::Value;
use sitesearch_core::source::RecordSource;

use crate::error::SourceError;

/// Whole-request timeout for the directory fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect timeout for the directory fetch.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches the record directory with a single HTTP GET.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers
    }

    /// Map HTTP status code to SourceError.
    fn status_to_error(status: reqwest::StatusCode, body: String) -> SourceError {
        match status.as_u16() {
            404 => SourceError::NotFound(body),
            code => SourceError::ServerError {
                status: code,
                message: body,
            },
        }
    }

    /// Classify transport failures the way callers care about them.
    fn transport_error(&self, e: reqwest::Error) -> SourceError {
        if e.is_timeout() {
            SourceError::Timeout {
                duration: REQUEST_TIMEOUT,
                source: e,
            }
        } else if e.is_connect() {
            SourceError::ConnectionRefused(self.url.clone())
        } else {
            SourceError::Http(e)
        }
    }
}

impl RecordSource for HttpSource {
    type Error = SourceError;

    fn fetch(&self) -> Result<Value, SourceError> {
        debug!("GET {}", self.url);

        let resp = self
            .client
            .get(&self.url)
            .headers(Self::headers())
            .send()
            .map_err(|e| self.transport_error(e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(Self::status_to_error(status, text));
        }

        let body = resp.text().map_err(|e| self.transport_error(e))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the record directory from a JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for FileSource {
    type Error = SourceError;

    fn fetch(&self) -> Result<Value, SourceError> {
        debug!("reading {}", self.path.display());
        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Either source, picked from a location string.
pub enum DataSource {
    Http(HttpSource),
    File(FileSource),
}

impl DataSource {
    /// `http://` / `https://` locations use HTTP; anything else is a path.
    pub fn from_location(location: &str) -> Result<Self, SourceError> {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Http(HttpSource::new(location)?))
        } else {
            Ok(Self::File(FileSource::new(location)))
        }
    }
}

impl RecordSource for DataSource {
    type Error = SourceError;

    fn fetch(&self) -> Result<Value, SourceError> {
        match self {
            Self::Http(source) => source.fetch(),
            Self::File(source) => source.fetch(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }
}
