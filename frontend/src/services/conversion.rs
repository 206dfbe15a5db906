//! Browser transport for the conversion backend.
//!
//! Uses `gloo-net` for HTTP and `gloo-timers` for the delay between polls.

use async_trait::async_trait;
use gloo_net::http::Request;
use leptos::{SignalSet, WriteSignal};
use std::time::Duration;
use web_sys::{File, FormData};

use scorelift::{
    parse_status, ClientConfig, ClientError, ClientResult, ConversionApi, ConversionStatus, SessionId,
    Sleeper, UploadResponse, ViewSink, ViewState, UPLOAD_FIELD,
};

/// `gloo-net` implementation of [`ConversionApi`].
#[derive(Debug, Clone)]
pub struct BackendApi {
    config: ClientConfig,
}

impl BackendApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ConversionApi for BackendApi {
    type File = File;

    async fn upload(&self, file: File) -> ClientResult<SessionId> {
        let form_data = FormData::new()
            .map_err(|e| ClientError::Browser(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob(UPLOAD_FIELD, &file)
            .map_err(|e| ClientError::Browser(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.config.upload_url())
            .body(form_data)
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::upload_rejected(&body));
        }

        let parsed = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(parsed.id)
    }

    async fn status(&self, id: &SessionId) -> ClientResult<ConversionStatus> {
        let response = Request::get(&self.config.status_url(id))
            .send()
            .await
            .map_err(|e| {
                log::warn!("Status request failed: {}", e);
                ClientError::StatusCheckFailed
            })?;

        if !response.ok() {
            log::warn!("Status check returned {}", response.status());
            return Err(ClientError::StatusCheckFailed);
        }

        let body = response
            .text()
            .await
            .map_err(|_| ClientError::StatusCheckFailed)?;
        Ok(parse_status(&body)?)
    }
}

/// Poll delay backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerSleeper;

#[async_trait(?Send)]
impl Sleeper for TimerSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Pushes controller transitions into a Leptos signal.
#[derive(Clone, Copy)]
pub struct SignalView(pub WriteSignal<ViewState>);

impl ViewSink for SignalView {
    fn show(&self, state: &ViewState) {
        self.0.set(state.clone());
    }
}
