//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once by the page with `use_context_provider`.
//! Components that only need part of it take props instead, so the map,
//! bar chart and tree map never write to the selection directly.

use mrb_basins::BasinCollection;
use dioxus::prelude::*;

/// Shared state of the dashboard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Basin dataset (None until loaded, or when loading failed)
    pub basins: Signal<Option<BasinCollection>>,
    /// Optional rivers reference layer
    pub rivers: Signal<Option<BasinCollection>>,
    pub loading: Signal<bool>,
    pub error_msg: Signal<Option<String>>,
    /// `RIVERBASIN` of the basin currently highlighted
    pub selected_basin: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            basins: Signal::new(None),
            rivers: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_basin: Signal::new(None),
        }
    }

    /// Selection callback target used by every child that can select a basin.
    pub fn select(&mut self, basin: Option<String>) {
        if *self.selected_basin.peek() != basin {
            self.selected_basin.set(basin);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
