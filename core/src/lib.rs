//! # ScoreLift - upload/poll controller
//!
//! Client side of the ScoreLift conversion page: a PDF score is uploaded to
//! the conversion backend, which turns it into MusicXML movements. This crate
//! tracks the conversion from upload to a terminal panel.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────┐     ┌─────────────┐
//! │  DOM events │────▶│ ConversionController │────▶│  ViewSink   │
//! │ (drop, pick)│     │  (session, state)    │     │  (panels)   │
//! └─────────────┘     └──────────┬───────────┘     └─────────────┘
//!                                │
//!                     ┌──────────┴───────────┐
//!                     ▼                      ▼
//!              ConversionApi              Sleeper
//!          (gloo-net / reqwest)     (gloo-timers / tokio)
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Endpoint URLs, poll interval, file name check
//! - [`protocol`] - Backend wire types
//! - [`state`] - View states and movement count wording
//! - [`error`] - Error taxonomy shown on the error panel
//! - [`controller`] - The controller and its seams
//! - `http` - Native `reqwest` transport (not built for wasm32)

// Core modules
pub mod config;
pub mod error;
pub mod protocol;
pub mod state;

// Orchestration
pub mod controller;

// Native transport
#[cfg(not(target_arch = "wasm32"))]
pub mod http;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{
    is_accepted_file_name, ClientConfig, ACCEPTED_EXTENSION, BACKEND_URL, POLL_INTERVAL_MS,
    UPLOAD_FIELD,
};

pub use error::{ClientError, ClientResult};

pub use protocol::{parse_status, ConversionStatus, SessionId, StatusResponse, UploadResponse};

pub use state::{completion_summary, pluralize_movements, ViewState};

pub use controller::{ConversionApi, ConversionController, FileDecision, Sleeper, ViewSink};

#[cfg(not(target_arch = "wasm32"))]
pub use http::{HttpApi, PdfUpload};
