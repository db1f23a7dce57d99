//! Plain-text rendering of the dashboard cards.

use std::fmt::Write;

use chrono::TimeZone;
use leleku_core::dashboard::DashboardState;
use leleku_core::view::{category_label, long_date, reading_time, reading_value, MISSING};

pub fn render<Tz: TimeZone>(state: &DashboardState, tz: &Tz) -> String {
    let updated = state
        .detail
        .updated_at
        .map(|ts| long_date(&ts.with_timezone(tz)))
        .unwrap_or_else(|| MISSING.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "Status Air Kolam     {}", category_label(state.detail.category));
    let _ = writeln!(out, "  diupdate pada      {}", updated);
    let _ = writeln!(out, "  skor               {}", state.detail.score);
    let _ = writeln!(
        out,
        "Ph Air Kolam         {} ({})",
        reading_value(&state.ph),
        reading_time(&state.ph, tz)
    );
    let _ = writeln!(
        out,
        "Kekeruhan Air Kolam  {} % ({})",
        reading_value(&state.turbidity),
        reading_time(&state.turbidity, tz)
    );
    let _ = writeln!(
        out,
        "Riwayat              {} pH, {} kekeruhan",
        state.ph.len(),
        state.turbidity.len()
    );
    out
}
