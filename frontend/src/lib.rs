//! ScoreLift - Frontend Rust/Leptos Application
//!
//! A WebAssembly page that uploads a PDF score to the conversion backend,
//! follows the conversion, and offers the MusicXML archive for download.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the ConversionController)                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── DropZone          (Idle)                               │
//! │  ├── ProcessingPanel   (Processing)                         │
//! │  ├── CompletePanel     (Complete)                           │
//! │  └── ErrorPanel        (Error)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Page settings and drop zone styling
//! - [`components`] - UI components (DropZone, panels, layout)
//! - [`services`] - Backend transport, poll timer, navigation

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use std::rc::Rc;
use web_sys::File;

use scorelift::{ConversionController, ViewState};

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Services
pub use services::*;

/// The controller as wired for the browser.
pub type PageController = ConversionController<BackendApi, TimerSleeper, SignalView>;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the page. Called from `main`.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 ScoreLift - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The visible panel, driven by the controller
    let (view_state, set_view_state) = create_signal(ViewState::Idle);

    let controller: Rc<PageController> = Rc::new(ConversionController::new(
        BackendApi::new(client_config()),
        TimerSleeper,
        SignalView(set_view_state),
        client_config(),
    ));

    let on_file = {
        let controller = controller.clone();
        Callback::new(move |file: File| {
            let controller = controller.clone();
            spawn_local(async move {
                let name = file.name();
                controller.accept_file(&name, file).await;
            });
        })
    };

    let on_download = {
        let controller = controller.clone();
        Callback::new(move |_: ()| {
            if let Some(url) = controller.download_url() {
                log::info!("⬇️ Downloading {}", url);
                if let Err(e) = navigate_to(&url) {
                    log::error!("{}", e);
                }
            }
        })
    };

    let on_new_conversion = Callback::new(move |_: ()| {
        log::info!("🔄 New conversion");
        controller.reset();
    });

    let on_retry = Callback::new(|_: ()| {
        if let Err(e) = reload_page() {
            log::error!("{}", e);
        }
    });

    view! {
        <div class="container">
            <Hero/>

            <DropZone view_state=view_state on_file=on_file/>
            <ProcessingPanel view_state=view_state/>
            <CompletePanel
                view_state=view_state
                on_download=on_download
                on_new_conversion=on_new_conversion
            />
            <ErrorPanel view_state=view_state on_retry=on_retry/>
        </div>

        <Footer/>
    }
}
