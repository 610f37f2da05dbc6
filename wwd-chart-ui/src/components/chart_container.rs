//! Container for D3-rendered output (the point map and the tables).

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into; must match the id passed to the
    /// js_bridge render call
    pub id: String,
    /// Show a placeholder overlay until D3 has drawn into the container
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels. The point map needs more room than
    /// the readings and statistics tables.
    #[props(default = 440)]
    pub min_height: u32,
}

/// A reserved region of the page for one D3 rendering target.
///
/// Keeping a minimum height prevents the layout from jumping while the
/// bridge's wait-for-D3 polling is still in flight.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; margin-bottom: 12px;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666; font-size: 13px;",
                    "Rendering…"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
