//! Tolerant decoding of embedded JSON arrays

use linkstats_shared::{DashboardError, DashboardResult, LocationRecord, RawRecord, RecordShape};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Records decoded from one element, plus the entries that were rejected
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecords<T> {
    pub records: Vec<T>,
    pub rejected: Vec<DashboardError>,
}

impl<T> Default for ParsedRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

pub struct RecordParser;

impl RecordParser {
    /// Decode a label/value array.
    ///
    /// The first decoded record fixes the shape of the array. Entries that
    /// match neither shape, or the other shape, are rejected individually so
    /// that the remaining records keep their positional pairing.
    pub fn parse_records(source_id: &str, text: &str) -> DashboardResult<ParsedRecords<RawRecord>> {
        let entries = Self::parse_array(source_id, text)?;
        let mut parsed = ParsedRecords {
            records: Vec::with_capacity(entries.len()),
            rejected: Vec::new(),
        };
        let mut shape: Option<RecordShape> = None;

        for (index, entry) in entries.into_iter().enumerate() {
            let decoded = match entry {
                Value::Object(_) => serde_json::from_value::<RawRecord>(entry).ok(),
                _ => None,
            };
            let record = match decoded {
                Some(record) => record,
                None => {
                    parsed.rejected.push(DashboardError::InvalidRecord {
                        index,
                        message: "expected {Time, Count} or {Label, Value}".to_string(),
                    });
                    continue;
                }
            };

            match shape {
                None => shape = Some(record.shape()),
                Some(expected) if expected != record.shape() => {
                    parsed.rejected.push(DashboardError::MixedShapes {
                        index,
                        expected: expected.to_string(),
                        actual: record.shape().to_string(),
                    });
                    continue;
                }
                Some(_) => {}
            }

            parsed.records.push(record);
        }

        Ok(parsed)
    }

    /// Decode the `{CountryCode, VisitCount}` array of the world map
    pub fn parse_locations(
        source_id: &str,
        text: &str,
    ) -> DashboardResult<ParsedRecords<LocationRecord>> {
        Self::parse_each(source_id, text)
    }

    fn parse_each<T: DeserializeOwned>(
        source_id: &str,
        text: &str,
    ) -> DashboardResult<ParsedRecords<T>> {
        let entries = Self::parse_array(source_id, text)?;
        let mut parsed = ParsedRecords::default();

        for (index, entry) in entries.into_iter().enumerate() {
            if !entry.is_object() {
                parsed.rejected.push(DashboardError::InvalidRecord {
                    index,
                    message: format!("expected an object, got {entry}"),
                });
                continue;
            }

            match serde_json::from_value::<T>(entry) {
                Ok(record) => parsed.records.push(record),
                Err(err) => parsed.rejected.push(DashboardError::InvalidRecord {
                    index,
                    message: err.to_string(),
                }),
            }
        }

        Ok(parsed)
    }

    /// Blank text and `null` both mean "no data"
    fn parse_array(source_id: &str, text: &str) -> DashboardResult<Vec<Value>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let entries: Option<Vec<Value>> = serde_json::from_str(text)
            .map_err(|err| DashboardError::data_parse(source_id, &err))?;

        Ok(entries.unwrap_or_default())
    }
}
