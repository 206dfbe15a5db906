//! Application configuration.
//!
//! Endpoint and polling settings come from `scorelift::ClientConfig`; this
//! module only holds what the page itself needs.

use scorelift::ClientConfig;

/// Page title.
pub const APP_NAME: &str = "ScoreLift";

/// `accept` attribute of the hidden file input.
pub const FILE_INPUT_ACCEPT: &str = ".pdf";

/// Drop zone border while a file is dragged over it.
pub const DRAG_ACTIVE_BORDER: &str = "var(--brand-purple)";

/// Drop zone background while a file is dragged over it.
pub const DRAG_ACTIVE_BACKGROUND: &str = "rgba(255, 255, 255, 0.8)";

/// Drop zone border at rest.
pub const DRAG_IDLE_BORDER: &str = "var(--brand-mid)";

/// Drop zone background at rest.
pub const DRAG_IDLE_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";

/// Same-origin backend, one status check per second.
pub fn client_config() -> ClientConfig {
    ClientConfig::default()
}

/// Inline `(border-color, background)` of the drop zone.
pub fn drop_zone_colors(dragging: bool) -> (&'static str, &'static str) {
    if dragging {
        (DRAG_ACTIVE_BORDER, DRAG_ACTIVE_BACKGROUND)
    } else {
        (DRAG_IDLE_BORDER, DRAG_IDLE_BACKGROUND)
    }
}
