//! Chart header component with title and caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Caption under the title (e.g., "50 Data")
    #[props(default = String::new())]
    pub caption: String,
}

/// Header for chart cards showing title and optional caption.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px; font-weight: 600;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #64748b;",
                    "{props.caption}"
                }
            }
        }
    }
}
