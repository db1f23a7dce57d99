//! Latest-value card for one sensor series.

use chrono::Local;
use dioxus::prelude::*;
use leleku_core::sensor::SensorSeries;
use leleku_core::view::{reading_time, reading_value};

use super::Card;

#[derive(Props, Clone, PartialEq)]
pub struct ReadingCardProps {
    pub title: String,
    pub series: SensorSeries,
    /// Appended after the value, e.g. "%"
    #[props(default = String::new())]
    pub unit: String,
}

#[component]
pub fn ReadingCard(props: ReadingCardProps) -> Element {
    let value = reading_value(&props.series);
    let value = if props.unit.is_empty() {
        value
    } else {
        format!("{} {}", value, props.unit)
    };
    let updated = reading_time(&props.series, &Local);

    rsx! {
        Card {
            p { style: "margin: 0; font-size: 14px; color: #64748b;", "{props.title}" }
            h2 {
                style: "margin: 4px 0 16px 0; font-size: 28px; font-weight: 600; font-variant-numeric: tabular-nums;",
                "{value}"
            }
            div { style: "font-size: 14px; font-weight: 500;", "Data terakhir diupdate pada:" }
            div { style: "font-size: 14px; color: #64748b;", "{updated}" }
        }
    }
}
