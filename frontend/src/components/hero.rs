//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"ScoreLift - PDF to MusicXML"</h1>
            <p class="subtitle">
                "Turn a printed score into editable MusicXML. "
                "Each movement of the piece comes back as its own file."
            </p>
        </div>
    }
}
