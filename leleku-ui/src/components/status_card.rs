//! Water quality status card, color-coded by category.

use chrono::Local;
use dioxus::prelude::*;
use leleku_core::sensor::WaterQualityDetail;
use leleku_core::view::{category_label, long_date, StatusTone, MISSING};

use super::Card;

#[derive(Props, Clone, PartialEq)]
pub struct StatusCardProps {
    pub detail: WaterQualityDetail,
}

/// Status card: green for "Baik", yellow for "Normal", red for "Buruk",
/// plain when no category has been computed yet.
#[component]
pub fn StatusCard(props: StatusCardProps) -> Element {
    let tone = StatusTone::for_category(props.detail.category);
    let muted = tone.muted_color();
    let label = category_label(props.detail.category);
    let updated = props
        .detail
        .updated_at
        .map(|ts| long_date(&ts.with_timezone(&Local)))
        .unwrap_or_else(|| MISSING.to_string());

    rsx! {
        Card {
            style: tone.card_style().to_string(),
            p { style: "margin: 0; font-size: 14px; color: {muted};", "Status Air Kolam" }
            h2 {
                style: "margin: 4px 0 16px 0; font-size: 28px; font-weight: 600;",
                "{label}"
            }
            div { style: "font-size: 14px; font-weight: 500;", "Data terakhir diupdate pada:" }
            div { style: "font-size: 14px; color: {muted};", "{updated}" }
        }
    }
}
