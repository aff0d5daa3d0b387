// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use dioxus_logger::tracing::warn;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Shows a blocking `window.alert`.
    pub fn alert(message: &str) {
        let shown = web_sys::window()
            .map(|win| win.alert_with_message(message).is_ok())
            .unwrap_or(false);
        if !shown {
            warn!("alert could not be shown: {}", message);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus_logger::tracing::warn;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// There is no blocking browser dialog off the web; the message is logged.
    pub fn alert(message: &str) {
        warn!("ALERT: {}", message);
    }
}
