// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// The cabinet's only error recovery: hard-reload the page, then head
    /// for the sign-in route. The reload drops all in-memory view state.
    pub fn reload_to_signin(signin_path: &str) {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let _ = location.reload();
            let _ = location.set_href(signin_path);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// There is no page to reload outside the browser; log the request so
    /// the error screen's button still does something observable.
    pub fn reload_to_signin(signin_path: &str) {
        dioxus_logger::tracing::warn!("re-authentication requested, sign-in route: {signin_path}");
    }
}
