//! Legend overlay in the bottom-right corner of the map.

use mrb_viz::legend::{Legend, LegendBody};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapLegendProps {
    pub legend: Legend,
}

#[component]
pub fn MapLegend(props: MapLegendProps) -> Element {
    let legend = props.legend;
    let gradient = legend.gradient_css().unwrap_or_default();

    rsx! {
        div {
            class: "info legend",
            style: "position: absolute; bottom: 24px; right: 12px; z-index: 1000; padding: 6px 8px; background: rgba(255,255,255,0.85); box-shadow: 0 0 15px rgba(0,0,0,0.2); border-radius: 5px; font-size: 12px; line-height: 18px; color: #555;",
            h4 {
                style: "margin: 0 0 5px; color: #777;",
                "{legend.title}"
            }
            match legend.body {
                LegendBody::Gradient { min_label, max_label, .. } => rsx! {
                    div {
                        style: "width: 160px; height: 12px; background: {gradient};",
                    }
                    div {
                        style: "display: flex; justify-content: space-between;",
                        span { "{min_label}" }
                        span { "{max_label}" }
                    }
                },
                LegendBody::Swatches(entries) => rsx! {
                    for entry in entries {
                        div {
                            i {
                                style: "width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.7; background: {entry.color};",
                            }
                            "{entry.label}"
                        }
                    }
                },
            }
        }
    }
}
