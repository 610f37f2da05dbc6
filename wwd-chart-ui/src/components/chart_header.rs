//! Dashboard header component with title and dataset description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Dashboard title
    pub title: String,
    /// Short explanation of what the dashboard shows
    #[props(default = String::new())]
    pub description: String,
}

/// Header showing the dashboard title and an optional description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666; max-width: 720px;",
                    "{props.description}"
                }
            }
        }
    }
}
