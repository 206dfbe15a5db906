//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"ScoreLift • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://github.com/scorelift/scorelift" class="footer-link" target="_blank">
                    "GitHub"
                </a>
                <a href="https://www.w3.org/2021/06/musicxml40/" class="footer-link" target="_blank">
                    "MusicXML"
                </a>
            </div>
        </footer>
    }
}
