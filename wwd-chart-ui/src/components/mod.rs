//! Reusable Dioxus RSX components for the forest health dashboard.

mod chart_container;
mod chart_header;
mod date_selector;
mod error_display;
mod loading_spinner;
mod point_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_selector::DateSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use point_selector::PointSelector;
