//! Chart-data adapter: embedded element → normalized series
//!
//! Every operation degrades to an empty result. A missing element means the
//! feature is not on the page; malformed content is logged and otherwise
//! ignored so that one broken payload never stops sibling widgets.

use linkstats_shared::{NormalizedSeries, RawRecord, RegionValues, TimePoint};
use log::{debug, error, warn};

use crate::labels::parse_timestamp;
use crate::parser::{ParsedRecords, RecordParser};
use crate::source::DataSource;

pub struct SeriesLoader<S> {
    source: S,
}

impl<S: DataSource> SeriesLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether the page carries the element at all
    pub fn has_element(&self, element_id: &str) -> bool {
        self.source.contains(element_id)
    }

    /// Label/value series of the element, in document order
    pub fn load_series(&self, element_id: &str) -> NormalizedSeries {
        let records = self.read_records(element_id);
        NormalizedSeries::from(records.as_slice())
    }

    /// Date-time/count pairs of a `{Time, Count}` element, in document order
    pub fn load_time_series_points(&self, element_id: &str) -> Vec<TimePoint> {
        let records = self.read_records(element_id);
        let mut points = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let RawRecord::TimeSeries(record) = record else {
                warn!("#{element_id}: record {index} has no Time field, skipping");
                continue;
            };

            match parse_timestamp(&record.time) {
                Ok(x) => points.push(TimePoint::new(x, record.count)),
                Err(err) => warn!("#{element_id}: record {index}: {err}, skipping"),
            }
        }

        points
    }

    /// Country code → visit count of the world map element
    pub fn load_region_values(&self, element_id: &str) -> RegionValues {
        let Some(text) = self.read_text(element_id) else {
            return RegionValues::new();
        };

        match RecordParser::parse_locations(element_id, &text) {
            Ok(parsed) => Self::accept(element_id, parsed)
                .into_iter()
                .map(|location| (location.country_code, location.visit_count))
                .collect(),
            Err(err) => {
                error!("Failed to parse {element_id} data: {err}");
                RegionValues::new()
            }
        }
    }

    fn read_records(&self, element_id: &str) -> Vec<RawRecord> {
        let Some(text) = self.read_text(element_id) else {
            return Vec::new();
        };

        match RecordParser::parse_records(element_id, &text) {
            Ok(parsed) => Self::accept(element_id, parsed),
            Err(err) => {
                error!("Failed to parse {element_id} data: {err}");
                Vec::new()
            }
        }
    }

    fn read_text(&self, element_id: &str) -> Option<String> {
        let text = self.source.text_content(element_id);
        if text.is_none() {
            debug!("#{element_id} not present, using an empty series");
        }
        text
    }

    fn accept<T>(element_id: &str, parsed: ParsedRecords<T>) -> Vec<T> {
        for rejection in &parsed.rejected {
            warn!("#{element_id}: {rejection}, skipping");
        }
        parsed.records
    }
}
