//! Dropdown for the metric driving the map colors.

use mrb_basins::Metric;
use dioxus::prelude::*;
use std::str::FromStr;

#[component]
pub fn MetricSelector(value: Metric, on_change: EventHandler<Metric>) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "metric-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Metric: "
            }
            select {
                id: "metric-select",
                onchange: move |evt: Event<FormData>| {
                    match Metric::from_str(&evt.value()) {
                        Ok(metric) => on_change.call(metric),
                        Err(e) => log::warn!("{}", e),
                    }
                },
                for metric in Metric::ALL {
                    option {
                        value: metric.key(),
                        selected: metric == value,
                        "{metric.label()}"
                    }
                }
            }
        }
    }
}
