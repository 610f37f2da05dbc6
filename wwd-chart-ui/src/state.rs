//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wwd_veg::dataset::Dataset;
use wwd_veg::point::MonitoredPoint;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until parsed)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if the dataset failed to load
    pub error_msg: Signal<Option<String>>,
    /// Distinct dates present in the dataset ("YYYY-MM-DD"), sorted
    pub available_dates: Signal<Vec<String>>,
    /// Currently selected date ("YYYY-MM-DD")
    pub selected_date: Signal<String>,
    /// Monitored points available for selection
    pub points: Signal<Vec<MonitoredPoint>>,
    /// Currently selected point id; empty string means all points
    pub selected_point: Signal<String>,
    /// True when the current selection matched no records
    pub no_data: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            available_dates: Signal::new(Vec::new()),
            selected_date: Signal::new(String::new()),
            points: Signal::new(Vec::new()),
            selected_point: Signal::new(String::new()),
            no_data: Signal::new(false),
        }
    }
}
