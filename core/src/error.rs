//! Error types for the conversion client.
//!
//! Every failure the controller can hit converges on the error panel, so
//! the `Display` output of [`ClientError`] is exactly the message shown to
//! the user. Rejecting a non-PDF file is not an error (see
//! [`crate::FileDecision`]).

use thiserror::Error;

/// Message shown when an upload fails with an empty response body.
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";

/// Message shown when the server reports a failure without details.
pub const CONVERSION_FAILED_MESSAGE: &str = "Conversion failed";

/// Errors raised while uploading or polling a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The server answered the upload with a non-success status.
    #[error("{0}")]
    UploadRejected(String),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The status endpoint failed, whatever the reason.
    #[error("Status check failed")]
    StatusCheckFailed,

    /// The server reported `status: "error"` for the session.
    #[error("{0}")]
    ConversionFailed(String),

    /// A success response did not carry the expected JSON.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// A browser API call failed (FormData, navigation, ...).
    #[error("Browser error: {0}")]
    Browser(String),
}

impl ClientError {
    /// Build an upload error from a plain-text response body.
    pub fn upload_rejected(body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            Self::UploadRejected(UPLOAD_FAILED_MESSAGE.to_string())
        } else {
            Self::UploadRejected(body.to_string())
        }
    }

    /// Build a conversion failure from the server's optional message.
    pub fn conversion_failed(message: Option<String>) -> Self {
        match message {
            Some(msg) if !msg.trim().is_empty() => Self::ConversionFailed(msg),
            _ => Self::ConversionFailed(CONVERSION_FAILED_MESSAGE.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
