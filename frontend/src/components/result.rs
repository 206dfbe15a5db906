//! Terminal panels: success and error.

use leptos::*;
use scorelift::{completion_summary, ViewState};

/// Subtitle of the success panel; empty outside `Complete`.
pub fn summary_text(state: &ViewState) -> String {
    match state {
        ViewState::Complete { movement_count } => completion_summary(*movement_count),
        _ => String::new(),
    }
}

/// Message of the error panel; empty outside `Error`.
pub fn error_text(state: &ViewState) -> String {
    match state {
        ViewState::Error { message } => message.clone(),
        _ => String::new(),
    }
}

/// Success panel with the movement count and the two follow-up actions.
#[component]
pub fn CompletePanel(
    view_state: ReadSignal<ViewState>,
    /// "Download again"
    on_download: Callback<()>,
    /// "New conversion"
    on_new_conversion: Callback<()>,
) -> impl IntoView {
    let summary = move || summary_text(&view_state.get());

    view! {
        <div class="complete" id="complete" class:hidden=move || !view_state.get().is_complete()>
            <h2 class="thank-you">"🎉 Conversion Complete"</h2>
            <p class="subtitle">{summary}</p>
            <div class="button-group">
                <button class="btn download-btn" id="download-again" on:click=move |_| on_download.call(())>
                    "Download again"
                </button>
                <button class="btn reset-btn" id="new-conversion" on:click=move |_| on_new_conversion.call(())>
                    "New conversion"
                </button>
            </div>
        </div>
    }
}

/// Error panel. The only way out is a full reload.
#[component]
pub fn ErrorPanel(
    view_state: ReadSignal<ViewState>,
    /// "Try Again"
    on_retry: Callback<()>,
) -> impl IntoView {
    let message = move || error_text(&view_state.get());

    view! {
        <div class="complete error" id="error" class:hidden=move || !view_state.get().is_error()>
            <h2 class="thank-you">"⚠️ Conversion Error"</h2>
            <p class="subtitle">{message}</p>
            <div class="button-group">
                <button class="btn reset-btn" on:click=move |_| on_retry.call(())>
                    "Try Again"
                </button>
            </div>
        </div>
    }
}
