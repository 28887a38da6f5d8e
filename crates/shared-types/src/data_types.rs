//! Records embedded by the server and the series derived from them

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of a time series as emitted by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Count")]
    pub count: f64,
}

/// One slice of a categorical breakdown as emitted by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

/// A record of an embedded data element.
///
/// The variant is chosen by which fields are present: `{Time, Count}` decodes
/// as a time-series record, `{Label, Value}` as a category record. Anything
/// else fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRecord {
    TimeSeries(TimeSeriesRecord),
    Category(CategoryRecord),
}

/// Shape of a [`RawRecord`], used to keep arrays homogeneous
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordShape {
    TimeSeries,
    Category,
}

impl std::fmt::Display for RecordShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordShape::TimeSeries => write!(f, "{{Time, Count}}"),
            RecordShape::Category => write!(f, "{{Label, Value}}"),
        }
    }
}

impl RawRecord {
    pub fn shape(&self) -> RecordShape {
        match self {
            RawRecord::TimeSeries(_) => RecordShape::TimeSeries,
            RawRecord::Category(_) => RecordShape::Category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RawRecord::TimeSeries(record) => &record.time,
            RawRecord::Category(record) => &record.label,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            RawRecord::TimeSeries(record) => record.count,
            RawRecord::Category(record) => record.value,
        }
    }
}

/// Visit count of one country, as emitted for the world map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "CountryCode")]
    pub country_code: String,
    #[serde(rename = "VisitCount")]
    pub visit_count: f64,
}

/// Country code to visit count, ordered for stable serialization
pub type RegionValues = BTreeMap<String, f64>;

/// Label/value series consumed by the charting engine.
///
/// `labels[i]` pairs with `data[i]`; both vectors always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedSeries {
    labels: Vec<String>,
    data: Vec<f64>,
}

impl NormalizedSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            data: Vec::with_capacity(capacity),
        }
    }

    /// Build a series from label/value pairs, keeping their order
    pub fn from_pairs<L, I>(pairs: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let mut series = Self::new();
        for (label, value) in pairs {
            series.push(label, value);
        }
        series
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.data.push(value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Rewrite every label, keeping values and order
    pub fn map_labels<F>(self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        Self {
            labels: self.labels.iter().map(|label| f(label)).collect(),
            data: self.data,
        }
    }
}

impl From<&[RawRecord]> for NormalizedSeries {
    fn from(records: &[RawRecord]) -> Self {
        let mut series = Self::with_capacity(records.len());
        for record in records {
            series.push(record.label(), record.value());
        }
        series
    }
}

/// Coordinate pair of the main time-series chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub x: DateTime<Utc>,
    pub y: f64,
}

impl TimePoint {
    pub fn new(x: DateTime<Utc>, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_shape_selection() {
        let records: Vec<RawRecord> = serde_json::from_str(
            r#"[{"Time":"2024-01-01T00:00:00Z","Count":0},{"Label":"google.com","Value":4}]"#,
        )
        .unwrap();

        assert_eq!(records[0].shape(), RecordShape::TimeSeries);
        assert_eq!(records[0].value(), 0.0);
        assert_eq!(records[1].shape(), RecordShape::Category);
        assert_eq!(records[1].label(), "google.com");
    }

    #[test]
    fn test_record_without_known_fields_fails() {
        let result: Result<RawRecord, _> = serde_json::from_str(r#"{"Count":3}"#);
        assert!(result.is_err());

        let result: Result<RawRecord, _> = serde_json::from_str(r#"{"Label":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalized_series_shape() {
        let series = NormalizedSeries::from_pairs([("a", 1.0), ("b", 2.0)]);
        let json = serde_json::to_value(&series).unwrap();

        assert_eq!(json, serde_json::json!({"labels": ["a", "b"], "data": [1.0, 2.0]}));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_map_labels_keeps_values() {
        let series = NormalizedSeries::from_pairs([("a", 1.0), ("b", 2.0)]);
        let series = series.map_labels(|label| label.to_uppercase());

        assert_eq!(series.labels(), ["A", "B"]);
        assert_eq!(series.data(), [1.0, 2.0]);
    }

    #[test]
    fn test_time_point_serializes_milliseconds() {
        let x = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let json = serde_json::to_value(TimePoint::new(x, 5.0)).unwrap();

        assert_eq!(json["x"], serde_json::json!(1_709_294_400_000_i64));
        assert_eq!(json["y"], serde_json::json!(5.0));
    }
}
