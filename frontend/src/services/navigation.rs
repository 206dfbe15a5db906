//! Full-page navigations: download link and "Try Again" reload.

use scorelift::{ClientError, ClientResult};

/// Navigate the browser to `url` (the server answers with a ZIP).
pub fn navigate_to(url: &str) -> ClientResult<()> {
    let window = web_sys::window().ok_or_else(|| ClientError::Browser("no global window".into()))?;
    window
        .location()
        .set_href(url)
        .map_err(|e| ClientError::Browser(format!("Failed to navigate: {:?}", e)))
}

/// Reload the page, discarding every bit of in-memory state.
pub fn reload_page() -> ClientResult<()> {
    let window = web_sys::window().ok_or_else(|| ClientError::Browser("no global window".into()))?;
    window
        .location()
        .reload()
        .map_err(|e| ClientError::Browser(format!("Failed to reload: {:?}", e)))
}
