//! Startup loading indicator.

use dioxus::prelude::*;

/// Shown while the embedded vegetation CSV is being parsed on mount.
/// Parsing is fast, so this is rarely visible for more than a frame.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 48px; color: #2E7D32;",
            "Loading vegetation data…"
        }
    }
}
