//! Water Scarcity Through Time
//!
//! Choropleth of major river basins with a monthly bar chart and a population
//! tree map, all sharing one selected basin.
//!
//! Data flow:
//! 1. `build.rs` copies `public/updated_mrb_basins.json` (and the optional
//!    `public/rivers.json`) into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount the GeoJSON is parsed into a `BasinCollection`; a missing or
//!    unparseable dataset leaves the page in its empty state.
//! 4. The page owns `selected_basin` and hands each child a callback to change it.

use mrb_basins::loader::load_basins;
use mrb_map_ui::components::{
    BarChart, BasinMap, ChartHeader, ChartPanel, ErrorDisplay, LoadingSpinner, TreeMap,
};
use mrb_map_ui::state::AppState;
use dioxus::prelude::*;

const BASINS_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/updated_mrb_basins.json"));
const RIVERS_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/rivers.json"));

const ROOT_NAME: &str = "water-scarcity-root";
const TITLE: &str = "Water Scarcity Through Time";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_NAME))
        .launch(App);
}

/// Parse an embedded file; empty placeholders mean "not shipped".
fn embedded(json: &str) -> Option<mrb_basins::BasinCollection> {
    if json.trim().is_empty() {
        return None;
    }
    load_basins(json)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        let basins = embedded(BASINS_JSON);
        if basins.is_none() {
            if BASINS_JSON.trim().is_empty() {
                log::warn!("No basin dataset embedded");
            } else {
                state
                    .error_msg
                    .set(Some("Failed to load basin data".to_string()));
            }
        }
        state.rivers.set(embedded(RIVERS_JSON));
        state.basins.set(basins);
        state.loading.set(false);
    });

    let on_select = move |basin: Option<String>| state.select(basin);

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: TITLE.to_string(),
                subtitle: "Major river basins: population, average scarcity and monthly scarcity".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            if (state.loading)() {
                LoadingSpinner { message: "Loading map data...".to_string() }
            } else if let Some(basins) = (state.basins)() {
                div {
                    style: "display: grid; grid-template-columns: 2fr 1fr; grid-template-rows: auto auto; gap: 16px;",
                    div {
                        style: "grid-row: 1 / span 2; min-height: 600px;",
                        BasinMap {
                            basins: basins.clone(),
                            rivers: (state.rivers)(),
                            selected: state.selected_basin,
                            on_select,
                        }
                    }
                    ChartPanel {
                        title: "Monthly Scarcity".to_string(),
                        BarChart { basins: basins.clone(), selected: state.selected_basin }
                    }
                    ChartPanel {
                        title: "Population by Basin".to_string(),
                        TreeMap { basins, on_select }
                    }
                }
            } else {
                div {
                    style: "padding: 40px; text-align: center; color: #666;",
                    "No basin data available."
                }
            }
        }
    }
}
