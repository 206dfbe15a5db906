//! Client configuration.
//!
//! The page is served by the conversion backend itself, so the default base
//! URL is empty and every endpoint resolves against the current origin.

use std::time::Duration;

use crate::protocol::SessionId;

/// Backend base URL. Empty means same origin.
pub const BACKEND_URL: &str = "";

/// Delay between two status checks.
pub const POLL_INTERVAL_MS: u64 = 1000;

/// Only files whose name ends with this suffix are uploaded.
///
/// The check is case-sensitive: `score.PDF` is ignored.
pub const ACCEPTED_EXTENSION: &str = ".pdf";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Endpoint locations and polling cadence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every endpoint path, without trailing slash.
    pub base_url: String,
    /// Fixed delay between status checks. There is no backoff.
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }
}

impl ClientConfig {
    /// Config pointing at an explicit backend, e.g. `http://127.0.0.1:8080`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Override the delay between status checks.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url)
    }

    pub fn status_url(&self, id: &SessionId) -> String {
        format!("{}/status/{}", self.base_url, id)
    }

    pub fn download_url(&self, id: &SessionId) -> String {
        format!("{}/download/{}", self.base_url, id)
    }
}

/// Whether a file name passes the upload precondition.
pub fn is_accepted_file_name(name: &str) -> bool {
    name.ends_with(ACCEPTED_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = ClientConfig::default();
        let id = SessionId::from("abc123");
        assert_eq!(config.upload_url(), "/upload");
        assert_eq!(config.status_url(&id), "/status/abc123");
        assert_eq!(config.download_url(&id), "/download/abc123");
        assert_eq!(config.poll_interval, Duration::from_millis(1000));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ClientConfig::with_base_url("http://localhost:8080/");
        assert_eq!(config.upload_url(), "http://localhost:8080/upload");
    }

    #[test]
    fn test_pdf_suffix_is_case_sensitive() {
        assert!(is_accepted_file_name("symphony.pdf"));
        assert!(is_accepted_file_name(".pdf"));
        assert!(!is_accepted_file_name("symphony.PDF"));
        assert!(!is_accepted_file_name("symphony.pdf.zip"));
        assert!(!is_accepted_file_name("notes.txt"));
        assert!(!is_accepted_file_name(""));
    }
}
