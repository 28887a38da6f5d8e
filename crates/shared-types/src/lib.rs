//! Shared types for the link statistics dashboard
//!
//! This crate contains the types that flow between the data adapter, the
//! widget layer and the wasm bridge: the records the server embeds in the
//! page, the normalized series handed to the charting engine, notification
//! payloads and the common error type.

use serde::{Deserialize, Serialize};

pub mod data_types;
pub mod errors;
pub mod events;

pub use data_types::{
    CategoryRecord, LocationRecord, NormalizedSeries, RawRecord, RecordShape, RegionValues,
    TimePoint, TimeSeriesRecord,
};
pub use errors::{DashboardError, DashboardResult, ErrorResponse};

/// Chart types the dashboard asks the charting engine for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
