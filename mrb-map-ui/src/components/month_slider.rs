//! Month slider, shown only while the monthly metric is active.

use mrb_basins::Month;
use dioxus::prelude::*;

#[component]
pub fn MonthSlider(value: Month, on_change: EventHandler<Month>) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0; display: flex; align-items: center; gap: 8px;",
            label {
                r#for: "month-slider",
                style: "font-weight: bold;",
                "Month: "
            }
            input {
                id: "month-slider",
                r#type: "range",
                min: "0",
                max: "11",
                step: "1",
                value: "{value.index()}",
                oninput: move |evt: Event<FormData>| {
                    let month = evt.value().parse::<usize>().ok().and_then(Month::from_index);
                    if let Some(month) = month {
                        on_change.call(month);
                    }
                },
            }
            span {
                style: "min-width: 40px;",
                "{value.label()}"
            }
        }
    }
}
