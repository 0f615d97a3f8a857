//! Banner for data that failed to load.

use dioxus::prelude::*;

const FALLBACK_REASON: &str = "the dataset could not be read";

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Reason shown after the banner label; blank messages get a generic one.
pub fn banner_reason(message: &str) -> &str {
    match message.trim() {
        "" => FALLBACK_REASON,
        reason => reason,
    }
}

/// Shown above the page body; the page still renders its empty state below.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let reason = banner_reason(&props.message);
    rsx! {
        div {
            role: "alert",
            style: "padding: 10px 14px; margin: 8px 0; background: #FFF4E5; color: #8A4B00; border-left: 4px solid #F57C00; border-radius: 2px;",
            strong { "Data unavailable: " }
            "{reason}"
        }
    }
}
