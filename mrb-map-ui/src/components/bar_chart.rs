//! Monthly values of the selected basin as a bar chart.

use mrb_basins::{BasinCollection, Month};
use mrb_utils::format::format_with_commas;
use mrb_viz::interaction::NO_DATA;
use mrb_viz::layout::bar_layout;
use mrb_viz::palette;
use dioxus::prelude::*;

const WIDTH: f64 = 480.0;
const PLOT_HEIGHT: f64 = 200.0;
const TOP_MARGIN: f64 = 16.0;
const AXIS_HEIGHT: f64 = 20.0;
const BAR_GAP: f64 = 6.0;

#[component]
pub fn BarChart(basins: BasinCollection, selected: ReadSignal<Option<String>>) -> Element {
    let Some(name) = selected.read().clone() else {
        return rsx! {
            p {
                style: "color: #666; font-size: 13px;",
                "Hover over a basin to see its monthly data."
            }
        };
    };
    let Some(feature) = basins.find_basin(&name) else {
        return rsx! {
            p {
                style: "color: #666; font-size: 13px;",
                "{NO_DATA} for {name}"
            }
        };
    };

    let series = BasinCollection::monthly_series(feature);
    let bars = bar_layout(&series, WIDTH, PLOT_HEIGHT, BAR_GAP);
    let fill = palette::MONTHLY_BLUES[5].to_string();
    let total_height = TOP_MARGIN + PLOT_HEIGHT + AXIS_HEIGHT;

    rsx! {
        div {
            h4 {
                style: "margin: 0 0 4px 0; font-size: 14px;",
                "{name}"
            }
            svg {
                width: "100%",
                view_box: "0 0 {WIDTH} {total_height}",
                g {
                    transform: "translate(0, {TOP_MARGIN})",
                    for bar in bars {
                        rect {
                            x: "{bar.rect.x}",
                            y: "{bar.rect.y}",
                            width: "{bar.rect.w}",
                            height: "{bar.rect.h}",
                            fill: "{fill}",
                        }
                        text {
                            x: "{bar.rect.x + bar.rect.w / 2.0}",
                            y: "{bar.rect.y - 3.0}",
                            text_anchor: "middle",
                            font_size: "9",
                            fill: "#333",
                            {bar.value.map(format_with_commas).unwrap_or_else(|| NO_DATA.to_string())}
                        }
                        text {
                            x: "{bar.rect.x + bar.rect.w / 2.0}",
                            y: "{PLOT_HEIGHT + 14.0}",
                            text_anchor: "middle",
                            font_size: "10",
                            fill: "#555",
                            {Month::from_index(bar.index).map(|m| m.label()).unwrap_or_default()}
                        }
                    }
                }
            }
        }
    }
}
