use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Which sensor produced a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    #[serde(rename = "PH_AIR")]
    Ph,
    #[serde(rename = "KEKERUHAN")]
    Turbidity,
    /// Any type tag the dashboard does not chart.
    #[serde(other)]
    Unknown,
}

/// A single immutable measurement as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    #[serde(rename = "type")]
    pub kind: SensorKind,
    pub value: f64,
    #[serde(rename = "createdAt")]
    pub recorded_at: DateTime<Utc>,
}

/// Readings of one kind, ascending by `recorded_at`.
///
/// Only the `dashboard` splitters build non-empty series, which keeps every
/// element the same kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorSeries {
    readings: Vec<SensorReading>,
}

impl SensorSeries {
    /// Keep the readings of `kind`, stable-sorted by timestamp.
    pub(crate) fn collect<'a>(
        kind: SensorKind,
        readings: impl IntoIterator<Item = &'a SensorReading>,
    ) -> Self {
        let mut readings: Vec<SensorReading> = readings
            .into_iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect();
        readings.sort_by_key(|r| r.recorded_at);
        Self { readings }
    }

    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    pub fn latest(&self) -> Option<&SensorReading> {
        self.readings.last()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Water quality category computed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Baik")]
    Good,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Buruk")]
    Poor,
}

impl Category {
    /// Label as shown on the status card.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Good => "Baik",
            Category::Normal => "Normal",
            Category::Poor => "Buruk",
        }
    }
}

/// Latest assessment. Replaced wholesale on every update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterQualityDetail {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub ph: f64,
    #[serde(rename = "kekeruhan", default, deserialize_with = "null_as_zero")]
    pub turbidity: f64,
    #[serde(rename = "skor", default, deserialize_with = "null_as_zero")]
    pub score: f64,
    #[serde(rename = "kategori", default)]
    pub category: Option<Category>,
    #[serde(rename = "createdAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body shared by the `/sensor` snapshot (`data` field) and the push event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sensor: Vec<SensorReading>,
    pub detail: WaterQualityDetail,
}

/// `GET /sensor` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotEnvelope {
    pub data: SensorPayload,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<SensorReading>, D::Error> {
    Ok(Option::<Vec<SensorReading>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reading_wire_names() {
        let reading: SensorReading = serde_json::from_value(json!({
            "type": "PH_AIR",
            "value": 7.4,
            "createdAt": "2025-03-01T08:30:00.000Z",
        }))
        .unwrap();
        assert_eq!(reading.kind, SensorKind::Ph);
        assert_eq!(reading.value, 7.4);
        assert_eq!(reading.recorded_at.to_rfc3339(), "2025-03-01T08:30:00+00:00");
    }

    #[test]
    fn test_unknown_kind_is_tolerated() {
        let reading: SensorReading = serde_json::from_value(json!({
            "type": "SUHU",
            "value": 28.0,
            "createdAt": "2025-03-01T08:30:00Z",
        }))
        .unwrap();
        assert_eq!(reading.kind, SensorKind::Unknown);
    }

    #[test]
    fn test_detail_with_nulls() {
        let detail: WaterQualityDetail = serde_json::from_value(json!({
            "ph": null,
            "kekeruhan": 12.5,
            "skor": 80,
            "kategori": null,
            "createdAt": null,
        }))
        .unwrap();
        assert_eq!(detail.ph, 0.0);
        assert_eq!(detail.turbidity, 12.5);
        assert_eq!(detail.score, 80.0);
        assert_eq!(detail.category, None);
        assert_eq!(detail.updated_at, None);
    }

    #[test]
    fn test_detail_categories() {
        for (raw, expected) in [
            ("Baik", Category::Good),
            ("Normal", Category::Normal),
            ("Buruk", Category::Poor),
        ] {
            let detail: WaterQualityDetail =
                serde_json::from_value(json!({ "kategori": raw })).unwrap();
            assert_eq!(detail.category, Some(expected));
            assert_eq!(expected.label(), raw);
        }
    }

    #[test]
    fn test_snapshot_envelope_without_sensor_list() {
        let envelope: SnapshotEnvelope = serde_json::from_value(json!({
            "data": { "sensor": null, "detail": { "ph": 7.0 } }
        }))
        .unwrap();
        assert!(envelope.data.sensor.is_empty());
        assert_eq!(envelope.data.detail.ph, 7.0);
    }

    #[test]
    fn test_snapshot_envelope_requires_detail() {
        let result = serde_json::from_value::<SnapshotEnvelope>(json!({
            "data": { "sensor": [] }
        }));
        assert!(result.is_err());
    }
}
