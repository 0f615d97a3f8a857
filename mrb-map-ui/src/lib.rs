//! Dioxus components and Leaflet bridge for the river basin dashboard.
//!
//! - `js_bridge`: Rust wrappers around the Leaflet map script, called via `js_sys::eval()`
//! - `state`: reactive `AppState` shared through context
//! - `components`: the map, its controls and legend, and the auxiliary charts

pub mod components;
pub mod js_bridge;
pub mod state;
