//! Mount point for one D3 chart.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
}

/// A fixed-height div that D3 renders into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            style: "min-height: 250px; position: relative; width: 100%;",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
