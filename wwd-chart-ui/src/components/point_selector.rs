//! Dropdown selector for choosing a monitored point.

use crate::state::AppState;
use dioxus::prelude::*;

/// Monitored point dropdown selector.
/// Reads available points from AppState and updates selected_point on change.
/// The empty value means "all points".
#[component]
pub fn PointSelector() -> Element {
    let mut state = use_context::<AppState>();
    let points = state.points.read().clone();
    let selected = (state.selected_point)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_point.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "point-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Point: "
            }
            select {
                id: "point-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All points"
                }
                for point in points.iter() {
                    option {
                        value: "{point.point_id}",
                        selected: point.point_id == selected,
                        "{point.point_id} ({point.latitude:.4}, {point.longitude:.4})"
                    }
                }
            }
        }
    }
}
