//! View states of the conversion page.
//!
//! Exactly one panel is visible at a time:
//!
//! ```text
//!            accept .pdf              completed
//!   Idle ───────────────▶ Processing ───────────▶ Complete
//!    ▲                        │                      │
//!    │                        │ error / failure      │ new conversion
//!    │                        ▼                      │
//!    │  reload             Error                     │
//!    └────────────────────────┴──────────────────────┘
//! ```

/// The visible panel and what it displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Drop zone waiting for a file.
    #[default]
    Idle,
    /// Upload or conversion running. `detail` is the server's latest message.
    Processing { detail: Option<String> },
    /// Conversion produced `movement_count` MusicXML files.
    Complete { movement_count: u32 },
    /// Something failed; `message` is shown as-is.
    Error { message: String },
}

impl ViewState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, ViewState::Processing { .. })
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ViewState::Complete { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error { .. })
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Processing { .. } => "processing",
            ViewState::Complete { .. } => "complete",
            ViewState::Error { .. } => "error",
        }
    }
}

/// "1 movement", "0 movements", "3 movements".
pub fn pluralize_movements(count: u32) -> String {
    if count == 1 {
        "1 movement".to_string()
    } else {
        format!("{} movements", count)
    }
}

/// Subtitle of the success panel.
pub fn completion_summary(count: u32) -> String {
    format!("Successfully converted {}", pluralize_movements(count))
}
