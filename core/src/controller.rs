//! Upload/poll controller.
//!
//! Drives one conversion from file selection to a terminal panel:
//!
//! ```text
//! accept_file ─▶ Processing ─▶ POST /upload ─▶ GET /status/{id} ─┬─▶ Complete
//!                                                   ▲            ├─▶ Error
//!                                                   └─ sleep ◀───┘ (in progress)
//! ```
//!
//! The controller runs on a single-threaded event loop and is shared as an
//! `Rc`. Its mutable fields live in `RefCell`s that are never borrowed across
//! an `.await`, so UI handlers (reset, download) can run while a conversion
//! is suspended.

use async_trait::async_trait;
use std::cell::RefCell;
use std::time::Duration;

use crate::config::{is_accepted_file_name, ClientConfig};
use crate::error::{ClientError, ClientResult};
use crate::protocol::{ConversionStatus, SessionId};
use crate::state::ViewState;

// =============================================================================
// Seams
// =============================================================================

/// HTTP side of the conversion backend.
#[async_trait(?Send)]
pub trait ConversionApi {
    /// Platform file handle sent as the `file` multipart field.
    type File;

    /// `POST /upload`. Returns the issued session id.
    async fn upload(&self, file: Self::File) -> ClientResult<SessionId>;

    /// `GET /status/{id}`. Non-success responses map to
    /// [`ClientError::StatusCheckFailed`].
    async fn status(&self, id: &SessionId) -> ClientResult<ConversionStatus>;
}

/// Timer used between two polls.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Receives every view transition.
pub trait ViewSink {
    fn show(&self, state: &ViewState);
}

/// What happened to a selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDecision {
    /// The name passed the `.pdf` check and the conversion ran.
    Accepted,
    /// Not a PDF; nothing happened.
    Ignored,
}

// =============================================================================
// Controller
// =============================================================================

/// Owns the active session id and the visible view state.
pub struct ConversionController<A, S, V> {
    api: A,
    sleeper: S,
    view: V,
    config: ClientConfig,
    state: RefCell<ViewState>,
    session: RefCell<Option<SessionId>>,
}

impl<A, S, V> ConversionController<A, S, V>
where
    A: ConversionApi,
    S: Sleeper,
    V: ViewSink,
{
    pub fn new(api: A, sleeper: S, view: V, config: ClientConfig) -> Self {
        Self {
            api,
            sleeper,
            view,
            config,
            state: RefCell::new(ViewState::Idle),
            session: RefCell::new(None),
        }
    }

    /// Current view state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Active session, if an upload succeeded and no reset happened since.
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.borrow().clone()
    }

    /// Run a full conversion for a selected file.
    ///
    /// Files whose name does not end in `.pdf` are ignored without any state
    /// change or request. Otherwise this resolves once the view reached
    /// `Complete` or `Error`, which may take forever if the server keeps
    /// reporting progress.
    pub async fn accept_file(&self, file_name: &str, file: A::File) -> FileDecision {
        if !is_accepted_file_name(file_name) {
            log::debug!("Ignoring non-PDF file: {}", file_name);
            return FileDecision::Ignored;
        }

        log::info!("📤 Uploading {}", file_name);
        self.set_state(ViewState::Processing { detail: None });

        match self.convert(file).await {
            Ok(movement_count) => {
                log::info!("✅ Conversion complete: {} movement(s)", movement_count);
                self.set_state(ViewState::Complete { movement_count });
            }
            Err(e) => {
                log::warn!("❌ Conversion failed: {}", e);
                self.set_state(ViewState::Error {
                    message: e.to_string(),
                });
            }
        }

        FileDecision::Accepted
    }

    /// Forget the session and show the drop zone again.
    pub fn reset(&self) {
        *self.session.borrow_mut() = None;
        self.set_state(ViewState::Idle);
    }

    /// Where "download again" navigates, when a session exists.
    pub fn download_url(&self) -> Option<String> {
        self.session
            .borrow()
            .as_ref()
            .map(|id| self.config.download_url(id))
    }

    async fn convert(&self, file: A::File) -> ClientResult<u32> {
        let id = self.api.upload(file).await?;
        log::info!("Upload accepted, session {}", id);
        *self.session.borrow_mut() = Some(id.clone());
        self.poll_until_done(&id).await
    }

    /// Sequential polling: the next request is issued only after the
    /// previous response is handled and the interval has elapsed.
    async fn poll_until_done(&self, id: &SessionId) -> ClientResult<u32> {
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            match self.api.status(id).await? {
                ConversionStatus::Completed { movement_count } => return Ok(movement_count),
                ConversionStatus::Failed { message } => {
                    return Err(ClientError::conversion_failed(message))
                }
                ConversionStatus::InProgress { message } => {
                    log::debug!("Poll #{} for {}: still running", attempt, id);
                    self.show_progress(message);
                    self.sleeper.sleep(self.config.poll_interval).await;
                }
            }
        }
    }

    fn show_progress(&self, message: Option<String>) {
        let Some(detail) = message else {
            return;
        };
        let changed = match &*self.state.borrow() {
            ViewState::Processing { detail: current } => current.as_deref() != Some(detail.as_str()),
            _ => false,
        };
        if changed {
            self.set_state(ViewState::Processing {
                detail: Some(detail),
            });
        }
    }

    fn set_state(&self, state: ViewState) {
        log::debug!("view: {} -> {}", self.state.borrow().name(), state.name());
        *self.state.borrow_mut() = state.clone();
        self.view.show(&state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    /// Scripted backend that records every call in a shared journal.
    struct ScriptedApi {
        journal: Journal,
        views: Rc<RefCell<Vec<ViewState>>>,
        upload: RefCell<Option<ClientResult<SessionId>>>,
        statuses: RefCell<VecDeque<ClientResult<ConversionStatus>>>,
    }

    #[async_trait(?Send)]
    impl ConversionApi for ScriptedApi {
        type File = Vec<u8>;

        async fn upload(&self, file: Vec<u8>) -> ClientResult<SessionId> {
            let shown = self.views.borrow().last().map(|v| v.name()).unwrap_or("none");
            self.journal
                .borrow_mut()
                .push(format!("upload {} bytes while {}", file.len(), shown));
            self.upload
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(ClientError::Transport("no upload scripted".into())))
        }

        async fn status(&self, id: &SessionId) -> ClientResult<ConversionStatus> {
            self.journal.borrow_mut().push(format!("status {}", id));
            self.statuses
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(ClientError::StatusCheckFailed))
        }
    }

    struct RecordingSleeper {
        journal: Journal,
    }

    #[async_trait(?Send)]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.journal
                .borrow_mut()
                .push(format!("sleep {}ms", duration.as_millis()));
        }
    }

    struct RecordingView {
        views: Rc<RefCell<Vec<ViewState>>>,
    }

    impl ViewSink for RecordingView {
        fn show(&self, state: &ViewState) {
            self.views.borrow_mut().push(state.clone());
        }
    }

    struct Harness {
        journal: Journal,
        views: Rc<RefCell<Vec<ViewState>>>,
        controller: ConversionController<ScriptedApi, RecordingSleeper, RecordingView>,
    }

    fn harness(
        upload: ClientResult<SessionId>,
        statuses: Vec<ClientResult<ConversionStatus>>,
    ) -> Harness {
        let journal: Journal = Rc::default();
        let views: Rc<RefCell<Vec<ViewState>>> = Rc::default();
        let api = ScriptedApi {
            journal: journal.clone(),
            views: views.clone(),
            upload: RefCell::new(Some(upload)),
            statuses: RefCell::new(statuses.into()),
        };
        let controller = ConversionController::new(
            api,
            RecordingSleeper {
                journal: journal.clone(),
            },
            RecordingView {
                views: views.clone(),
            },
            ClientConfig::default(),
        );
        Harness {
            journal,
            views,
            controller,
        }
    }

    fn pending() -> ClientResult<ConversionStatus> {
        Ok(ConversionStatus::InProgress { message: None })
    }

    #[tokio::test]
    async fn test_non_pdf_is_ignored() {
        let h = harness(Ok("abc123".into()), vec![]);

        for name in ["score.PDF", "score.png", "pdf", "score.pdf.txt"] {
            let decision = h.controller.accept_file(name, vec![1, 2, 3]).await;
            assert_eq!(decision, FileDecision::Ignored);
        }

        assert!(h.journal.borrow().is_empty());
        assert!(h.views.borrow().is_empty());
        assert_eq!(h.controller.state(), ViewState::Idle);
        assert_eq!(h.controller.session_id(), None);
    }

    #[tokio::test]
    async fn test_polls_sequentially_until_completed() {
        let h = harness(
            Ok("abc123".into()),
            vec![
                pending(),
                pending(),
                Ok(ConversionStatus::Completed { movement_count: 3 }),
            ],
        );

        let decision = h.controller.accept_file("bach.pdf", vec![0; 16]).await;
        assert_eq!(decision, FileDecision::Accepted);

        assert_eq!(
            *h.journal.borrow(),
            vec![
                "upload 16 bytes while processing",
                "status abc123",
                "sleep 1000ms",
                "status abc123",
                "sleep 1000ms",
                "status abc123",
            ]
        );
        assert_eq!(
            *h.views.borrow(),
            vec![
                ViewState::Processing { detail: None },
                ViewState::Complete { movement_count: 3 },
            ]
        );
        assert_eq!(
            h.controller.download_url().as_deref(),
            Some("/download/abc123")
        );
    }

    #[tokio::test]
    async fn test_upload_rejection_shows_server_body() {
        let h = harness(Err(ClientError::upload_rejected("file too large")), vec![]);

        h.controller.accept_file("big.pdf", vec![0; 4]).await;

        assert_eq!(
            h.controller.state(),
            ViewState::Error {
                message: "file too large".into()
            }
        );
        assert_eq!(h.controller.session_id(), None);
        assert!(!h.journal.borrow().iter().any(|e| e.starts_with("status")));
    }

    #[tokio::test]
    async fn test_status_failure_is_generic() {
        let h = harness(
            Ok("abc123".into()),
            vec![pending(), Err(ClientError::StatusCheckFailed)],
        );

        h.controller.accept_file("score.pdf", vec![]).await;

        assert_eq!(
            h.controller.state(),
            ViewState::Error {
                message: "Status check failed".into()
            }
        );
        assert_eq!(h.journal.borrow().len(), 4);
    }

    #[tokio::test]
    async fn test_server_reported_failure() {
        let h = harness(
            Ok("abc123".into()),
            vec![Ok(ConversionStatus::Failed {
                message: Some("Conversion failed - no movements generated".into()),
            })],
        );

        h.controller.accept_file("score.pdf", vec![]).await;

        assert_eq!(
            h.controller.state(),
            ViewState::Error {
                message: "Conversion failed - no movements generated".into()
            }
        );
        // The session survives until reset, like the download link would.
        assert!(h.controller.session_id().is_some());
    }

    #[tokio::test]
    async fn test_progress_message_is_rendered_once() {
        let converting = || {
            Ok(ConversionStatus::InProgress {
                message: Some("Converting PDF to MusicXML".into()),
            })
        };
        let h = harness(
            Ok("abc123".into()),
            vec![
                converting(),
                converting(),
                Ok(ConversionStatus::Completed { movement_count: 1 }),
            ],
        );

        h.controller.accept_file("score.pdf", vec![]).await;

        assert_eq!(
            *h.views.borrow(),
            vec![
                ViewState::Processing { detail: None },
                ViewState::Processing {
                    detail: Some("Converting PDF to MusicXML".into())
                },
                ViewState::Complete { movement_count: 1 },
            ]
        );
    }

    #[tokio::test]
    async fn test_status_without_status_field_keeps_polling() {
        let started = crate::protocol::parse_status(
            r#"{"message": "File uploaded, starting conversion"}"#,
        )
        .map_err(ClientError::from);
        let null_status =
            crate::protocol::parse_status(r#"{"status": null}"#).map_err(ClientError::from);
        let h = harness(
            Ok("abc123".into()),
            vec![
                started,
                null_status,
                Ok(ConversionStatus::Completed { movement_count: 2 }),
            ],
        );

        h.controller.accept_file("score.pdf", vec![]).await;

        assert_eq!(
            h.controller.state(),
            ViewState::Complete { movement_count: 2 }
        );
        assert_eq!(
            h.journal.borrow().iter().filter(|e| e.starts_with("status")).count(),
            3
        );
        assert_eq!(
            h.views.borrow()[1],
            ViewState::Processing {
                detail: Some("File uploaded, starting conversion".into())
            }
        );
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let h = harness(
            Ok("abc123".into()),
            vec![Ok(ConversionStatus::Completed { movement_count: 2 })],
        );

        h.controller.accept_file("score.pdf", vec![]).await;
        assert!(h.controller.state().is_complete());

        h.controller.reset();

        assert_eq!(h.controller.state(), ViewState::Idle);
        assert_eq!(h.controller.session_id(), None);
        assert_eq!(h.controller.download_url(), None);
        assert_eq!(h.views.borrow().last(), Some(&ViewState::Idle));
    }

    #[tokio::test]
    async fn test_reset_after_error() {
        let h = harness(Err(ClientError::Transport("Failed to fetch".into())), vec![]);

        h.controller.accept_file("score.pdf", vec![]).await;
        assert_eq!(
            h.controller.state(),
            ViewState::Error {
                message: "Failed to fetch".into()
            }
        );

        h.controller.reset();
        assert!(h.controller.state().is_idle());
    }
}
