//! Shared UI pieces for the forest health dashboard: reactive app state,
//! reusable Dioxus components, and typed wrappers around the D3.js
//! rendering functions.

pub mod components;
pub mod js_bridge;
pub mod state;
