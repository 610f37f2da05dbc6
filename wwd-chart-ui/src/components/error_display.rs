//! Fatal dataset error display.
//!
//! The only errors the dashboard can hit are load-time ones (bad or
//! missing dataset); they are fatal for the session, so this renders a
//! prominent box in place of the whole chart area.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shows a fatal dataset error.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 14px 16px; margin: 12px 0; background: #FDECEA; color: #B71C1C; border-left: 4px solid #B71C1C; border-radius: 2px;",
            strong { "Dataset error: " }
            "{props.message}"
            p {
                style: "margin: 6px 0 0 0; font-size: 12px; color: #7F1D1D;",
                "Check that the vegetation CSV has the expected columns and reload the page."
            }
        }
    }
}
