//! Seams between the widget layer and the page it runs in

use std::collections::HashSet;

use linkstats_shared::{DashboardResult, RegionValues};
use serde_json::Value;

/// A region of the page that widgets may be initialized in.
///
/// The whole document on first load, the swapped-in fragment afterwards.
pub trait ElementScope {
    fn contains(&self, element_id: &str) -> bool;
}

impl<T: ElementScope + ?Sized> ElementScope for &T {
    fn contains(&self, element_id: &str) -> bool {
        (**self).contains(element_id)
    }
}

/// Fixed set of element ids
#[derive(Debug, Clone, Default)]
pub struct IdScope {
    ids: HashSet<String>,
}

impl<S: Into<String>> FromIterator<S> for IdScope {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ElementScope for IdScope {
    fn contains(&self, element_id: &str) -> bool {
        self.ids.contains(element_id)
    }
}

/// The charting and mapping libraries as seen by the controller
pub trait ChartEngine {
    /// Live chart instance bound to a canvas
    type Handle;

    /// Whether a chart or map is already attached to this container
    fn has_chart(&self, container_id: &str) -> bool;

    /// Construct a chart from a `{type, data, options}` configuration
    fn create_chart(&mut self, container_id: &str, config: &Value) -> DashboardResult<Self::Handle>;

    /// Replace the data of one dataset and re-render
    fn replace_dataset(
        &mut self,
        handle: &Self::Handle,
        dataset_index: usize,
        data: &Value,
    ) -> DashboardResult<()>;

    /// Construct the world map from its options; `values` feed the region tooltips
    fn create_region_map(
        &mut self,
        container_id: &str,
        options: &Value,
        values: &RegionValues,
    ) -> DashboardResult<()>;
}
