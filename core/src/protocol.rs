//! Wire types for the conversion backend.
//!
//! | Method | Path            | Success body                          |
//! |--------|-----------------|---------------------------------------|
//! | POST   | `/upload`       | `{"id": "..."}`                       |
//! | GET    | `/status/{id}`  | `{"status": "...", "message": "..."}` |
//! | GET    | `/download/{id}`| ZIP archive (browser navigation)      |
//!
//! Upload failures come back as plain text. Status failures are never read.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Server-issued identifier of one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a successful `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: SessionId,
}

/// Body of a successful `GET /status/{id}`.
///
/// Every field is optional: a body without a usable `status` string is
/// treated as "still running", never as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// `"completed"`, `"error"`, or anything else while still running
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Progress or failure description
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    /// Unix seconds of the last server-side update
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Omitted by the server when zero
    #[serde(default)]
    pub movement_count: Option<u32>,
}

/// Accept any JSON value; keep it only when it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Interpreted status of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionStatus {
    /// Still running; poll again.
    InProgress { message: Option<String> },
    /// Finished with this many MusicXML movements.
    Completed { movement_count: u32 },
    /// The server gave up on the file.
    Failed { message: Option<String> },
}

impl From<StatusResponse> for ConversionStatus {
    fn from(response: StatusResponse) -> Self {
        let message = response.message.filter(|m| !m.trim().is_empty());
        match response.status.as_deref() {
            Some("completed") => ConversionStatus::Completed {
                movement_count: response.movement_count.unwrap_or(0),
            },
            Some("error") => ConversionStatus::Failed { message },
            _ => ConversionStatus::InProgress { message },
        }
    }
}

/// Parse a status body.
pub fn parse_status(json: &str) -> Result<ConversionStatus, serde_json::Error> {
    let response: StatusResponse = serde_json::from_str(json)?;
    if let Some(ts) = response.timestamp {
        log::debug!(
            "status '{}' updated at {}",
            response.status.as_deref().unwrap_or("-"),
            ts
        );
    }
    Ok(response.into())
}
