//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 8px 12px; background: #FFEBEE; color: #C62828; border-radius: 6px; border: 1px solid #EF9A9A; font-size: 14px;",
            "{props.message}"
        }
    }
}
