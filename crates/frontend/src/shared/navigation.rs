//! Outbound navigation helpers

/// Open `url` in a new browsing context.
///
/// Fire-and-forget: failures (no window, popup blocked) are only logged.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("window is not available, cannot open {}", url);
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => log::debug!("Opened {} in a new tab", url),
        Ok(None) => log::warn!("Popup blocked for {}", url),
        Err(e) => log::warn!("Failed to open {}: {:?}", url, e),
    }
}
