//! Pure rendering derivations of `DashboardState`.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::Serialize;

use crate::sensor::{Category, SensorSeries};

/// Placeholder for a missing label or timestamp.
pub const MISSING: &str = "-";

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Color treatment of the status card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Green,
    Yellow,
    Red,
    Neutral,
}

impl StatusTone {
    pub fn for_category(category: Option<Category>) -> Self {
        match category {
            Some(Category::Good) => StatusTone::Green,
            Some(Category::Normal) => StatusTone::Yellow,
            Some(Category::Poor) => StatusTone::Red,
            None => StatusTone::Neutral,
        }
    }

    /// Inline style for the card; the neutral tone keeps the default card look.
    pub fn card_style(&self) -> &'static str {
        match self {
            StatusTone::Green => "background: #15803d; border-color: #22c55e; color: #f8fafc;",
            StatusTone::Yellow => "background: #ca8a04; border-color: #eab308; color: #f8fafc;",
            StatusTone::Red => "background: #b91c1c; border-color: #ef4444; color: #f8fafc;",
            StatusTone::Neutral => "",
        }
    }

    /// Secondary text color; tinted cards use light text throughout.
    pub fn muted_color(&self) -> &'static str {
        match self {
            StatusTone::Neutral => "#64748b",
            _ => "#f8fafc",
        }
    }
}

/// Category label for the status card.
pub fn category_label(category: Option<Category>) -> &'static str {
    category.map(|c| c.label()).unwrap_or(MISSING)
}

/// Latest value of a series for a reading card, `0` when empty.
pub fn reading_value(series: &SensorSeries) -> String {
    series
        .latest()
        .map(|r| r.value.to_string())
        .unwrap_or_else(|| "0".to_string())
}

/// Timestamp of the latest reading in long form, or `-`.
pub fn reading_time<Tz: TimeZone>(series: &SensorSeries, tz: &Tz) -> String {
    series
        .latest()
        .map(|r| long_date(&r.recorded_at.with_timezone(tz)))
        .unwrap_or_else(|| MISSING.to_string())
}

/// Chart axis label, e.g. `Mar 1`.
pub fn short_date<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    format!("{} {}", month_abbrev(ts.month()), ts.day())
}

/// Card timestamp, e.g. `1 Maret 2025, 09:05`.
pub fn long_date<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    format!(
        "{} {} {}, {:02}:{:02}",
        ts.day(),
        MONTHS_ID[ts.month0() as usize],
        ts.year(),
        ts.hour(),
        ts.minute()
    )
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

/// One point handed to the D3 area chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// RFC 3339 timestamp, parsed by D3 for the x scale
    pub date: String,
    /// Short month/day label for ticks and the tooltip
    pub label: String,
    pub value: f64,
}

/// Chart input: the series verbatim, in order.
pub fn chart_points<Tz: TimeZone>(series: &SensorSeries, tz: &Tz) -> Vec<ChartPoint> {
    series
        .readings()
        .iter()
        .map(|r| {
            let local = r.recorded_at.with_timezone(tz);
            ChartPoint {
                date: r.recorded_at.to_rfc3339(),
                label: short_date(&local),
                value: r.value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{partition, DashboardState, Source};
    use crate::sensor::{SensorKind, WaterQualityDetail};
    use crate::testing::{at, payload, reading};
    use chrono::{FixedOffset, Utc};
    use serde_json::json;

    #[test]
    fn test_status_tone_by_category() {
        let cases = [
            ("Baik", StatusTone::Green),
            ("Normal", StatusTone::Yellow),
            ("Buruk", StatusTone::Red),
        ];
        for (raw, tone) in cases {
            let state = DashboardState::from_payload(payload(json!([]), Some(raw)), Source::Snapshot);
            assert_eq!(StatusTone::for_category(state.detail.category), tone);
            assert_eq!(category_label(state.detail.category), raw);
            assert!(!tone.card_style().is_empty());
        }

        let state = DashboardState::from_payload(payload(json!([]), None), Source::Snapshot);
        let tone = StatusTone::for_category(state.detail.category);
        assert_eq!(tone, StatusTone::Neutral);
        assert_eq!(tone.card_style(), "");
        assert_eq!(category_label(state.detail.category), MISSING);
        assert_eq!(
            StatusTone::for_category(WaterQualityDetail::default().category),
            StatusTone::Neutral
        );
    }

    #[test]
    fn test_reading_cards() {
        let empty = SensorSeries::default();
        assert_eq!(reading_value(&empty), "0");
        assert_eq!(reading_time(&empty, &Utc), MISSING);

        let readings = [
            reading(SensorKind::Ph, 7.0, "2025-03-01T07:00:00Z"),
            reading(SensorKind::Ph, 7.25, "2025-03-01T09:05:00Z"),
        ];
        let (ph, _) = partition(&readings);
        assert_eq!(reading_value(&ph), "7.25");
        assert_eq!(reading_time(&ph, &Utc), "1 Maret 2025, 09:05");
    }

    #[test]
    fn test_whole_values_print_without_fraction() {
        let readings = [
            reading(SensorKind::Turbidity, 40.0, "2025-03-01T07:00:00Z"),
            reading(SensorKind::Turbidity, 42.0, "2025-03-01T08:00:00Z"),
        ];
        let (_, turbidity) = partition(&readings);
        assert_eq!(reading_value(&turbidity), "42");
    }

    #[test]
    fn test_dates_follow_timezone() {
        let wib = FixedOffset::east_opt(7 * 3600).unwrap();
        let ts = at("2025-12-31T20:30:00Z");
        assert_eq!(short_date(&ts), "Dec 31");
        assert_eq!(short_date(&ts.with_timezone(&wib)), "Jan 1");
        assert_eq!(long_date(&ts.with_timezone(&wib)), "1 Januari 2026, 03:30");
    }

    #[test]
    fn test_chart_points_mirror_series() {
        let readings = [
            reading(SensorKind::Ph, 7.4, "2025-04-02T10:00:00Z"),
            reading(SensorKind::Ph, 7.1, "2025-04-01T10:00:00Z"),
        ];
        let (ph, _) = partition(&readings);
        let points = chart_points(&ph, &Utc);

        assert_eq!(
            points,
            vec![
                ChartPoint {
                    date: "2025-04-01T10:00:00+00:00".into(),
                    label: "Apr 1".into(),
                    value: 7.1,
                },
                ChartPoint {
                    date: "2025-04-02T10:00:00+00:00".into(),
                    label: "Apr 2".into(),
                    value: 7.4,
                },
            ]
        );
    }
}
