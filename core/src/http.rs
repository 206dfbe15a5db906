//! Native HTTP transport built on `reqwest`.
//!
//! The browser page uses the `gloo-net` transport from the frontend crate;
//! this one talks to the same backend from native code.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::config::{ClientConfig, UPLOAD_FIELD};
use crate::controller::ConversionApi;
use crate::error::{ClientError, ClientResult};
use crate::protocol::{parse_status, ConversionStatus, SessionId, UploadResponse};

/// A PDF held in memory, ready to be sent as a multipart part.
#[derive(Debug, Clone)]
pub struct PdfUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PdfUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// `reqwest` implementation of [`ConversionApi`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait(?Send)]
impl ConversionApi for HttpApi {
    type File = PdfUpload;

    async fn upload(&self, file: PdfUpload) -> ClientResult<SessionId> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str("application/pdf")
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::upload_rejected(&body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let parsed: UploadResponse = serde_json::from_str(&body)?;
        Ok(parsed.id)
    }

    async fn status(&self, id: &SessionId) -> ClientResult<ConversionStatus> {
        let response = self
            .client
            .get(self.config.status_url(id))
            .send()
            .await
            .map_err(|e| {
                log::warn!("Status request for {} failed: {}", id, e);
                ClientError::StatusCheckFailed
            })?;

        if !response.status().is_success() {
            log::warn!("Status check for {} returned {}", id, response.status());
            return Err(ClientError::StatusCheckFailed);
        }

        let body = response
            .text()
            .await
            .map_err(|_| ClientError::StatusCheckFailed)?;
        Ok(parse_status(&body)?)
    }
}
