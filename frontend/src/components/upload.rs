//! PDF drop zone with drag & drop and click-to-browse.
//!
//! Hands the selected file to `on_file`; the `.pdf` check happens in the
//! controller so every entry point behaves the same.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::config::{drop_zone_colors, FILE_INPUT_ACCEPT};
use scorelift::ViewState;

/// The drop zone is hidden, not removed, outside `Idle`.
pub fn drop_zone_hidden(state: &ViewState) -> bool {
    !state.is_idle()
}

#[component]
pub fn DropZone(
    /// Current panel; the zone is only visible while idle
    view_state: ReadSignal<ViewState>,
    /// Called with the first dropped or picked file
    on_file: Callback<File>,
) -> impl IntoView {
    let (dragging, set_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(true);
    };

    let on_drag_leave = move |_: DragEvent| set_dragging.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);

        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file.call(file);
        }
    };

    // Clicking anywhere in the zone opens the picker
    let on_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.call(file);
            // Picking the same file twice must fire `change` again
            input.set_value("");
        }
    };

    view! {
        <div class="upload-wrapper" class:hidden=move || drop_zone_hidden(&view_state.get())>
            <div
                class="drop-zone"
                id="drop-zone"
                style:border-color=move || drop_zone_colors(dragging.get()).0
                style:background=move || drop_zone_colors(dragging.get()).1
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=on_click
            >
                <div class="upload-icon">"🎼"</div>
                <div class="upload-text">"Drop a PDF score here"</div>
                <div class="upload-hint">"or click to browse"</div>
            </div>

            <input
                type="file"
                id="file-input"
                accept=FILE_INPUT_ACCEPT
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />
        </div>
    }
}
