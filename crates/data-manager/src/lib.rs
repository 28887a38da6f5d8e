//! Data Manager crate for the link statistics dashboard
//! Turns the JSON the server embeds in the page into chart-ready series

pub mod labels;
pub mod loader;
pub mod parser;
pub mod source;

pub use labels::{format_day_label, parse_timestamp};
pub use loader::SeriesLoader;
pub use parser::{ParsedRecords, RecordParser};
pub use source::{DataSource, StaticSource};
