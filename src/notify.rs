//! Error reporting
//!
//! Console logging plus a blocking alert for failed mutations.

const FALLBACK_MESSAGE: &str = "An error occurred";

/// Log a failed command to the browser console
pub fn log_error(context: &str, message: &str) {
    web_sys::console::error_1(&format!("[{}] {}", context, message).into());
}

/// Log and show the message in an alert dialog
pub fn alert_error(context: &str, message: &str) {
    log_error(context, message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(alert_text(message));
    }
}

fn alert_text(message: &str) -> &str {
    if message.trim().is_empty() {
        FALLBACK_MESSAGE
    } else {
        message
    }
}
