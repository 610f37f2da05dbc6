//! Date selector constrained to dates present in the dataset.
//!
//! A range slider indexes into the sorted list of available dates, so a
//! malformed date selection is impossible by construction.

use crate::state::AppState;
use dioxus::prelude::*;

/// Slider over the dataset's distinct dates.
#[component]
pub fn DateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let dates = state.available_dates.read().clone();
    let selected = (state.selected_date)();

    let index = dates.iter().position(|d| *d == selected).unwrap_or(0);
    let max_index = dates.len().saturating_sub(1);

    let on_input = move |evt: Event<FormData>| {
        let Ok(i) = evt.value().parse::<usize>() else {
            return;
        };
        let date = state.available_dates.read().get(i).cloned();
        if let Some(date) = date {
            state.selected_date.set(date);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Select date: "
            }
            input {
                r#type: "range",
                min: "0",
                max: "{max_index}",
                value: "{index}",
                style: "width: 240px;",
                oninput: on_input,
            }
            span {
                style: "font-variant-numeric: tabular-nums;",
                "{selected}"
            }
        }
    }
}
