//! Bordered box holding one of the auxiliary charts.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    pub title: String,
    #[props(default = 300)]
    pub min_height: u32,
    pub children: Element,
}

/// Titled panel; the chart is passed as children.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; border: 1px solid #ddd; border-radius: 4px; padding: 8px; box-sizing: border-box; background: white;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "{props.title}"
            }
            {props.children}
        }
    }
}
