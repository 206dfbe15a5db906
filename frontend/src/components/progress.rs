use leptos::*;
use scorelift::ViewState;

/// Server progress line; only present while processing.
pub fn processing_detail(state: &ViewState) -> Option<String> {
    match state {
        ViewState::Processing { detail } => detail.clone(),
        _ => None,
    }
}

#[component]
pub fn ProcessingPanel(view_state: ReadSignal<ViewState>) -> impl IntoView {
    let detail = move || processing_detail(&view_state.get());

    view! {
        <div class="processing" id="processing" class:hidden=move || !view_state.get().is_processing()>
            <div class="spinner"></div>
            <h2 class="processing-title">"Converting your score..."</h2>
            <Show
                when=move || detail().is_some()
                fallback=|| view! { }
            >
                <p class="processing-detail">{move || detail().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
