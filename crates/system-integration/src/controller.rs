//! Dashboard controller: scans a scope, builds widgets and owns the main chart

use linkstats_config::ChartPresets;
use linkstats_data::{DataSource, SeriesLoader};
use linkstats_shared::{DashboardError, DashboardResult};
use log::{debug, error, info};

use crate::host::{ChartEngine, ElementScope};
use crate::registry::WidgetRegistry;
use crate::widgets::{main_timeline_data, WidgetGroup, WidgetKind, WidgetSpec};

/// Outcome of one initialization pass
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InitReport {
    pub created: Vec<String>,
    /// Containers that already carried a chart
    pub skipped: Vec<String>,
    pub failed: Vec<(String, DashboardError)>,
}

impl InitReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct DashboardController<E: ChartEngine, S> {
    engine: E,
    loader: SeriesLoader<S>,
    presets: ChartPresets,
    registry: WidgetRegistry,
    main_chart: Option<E::Handle>,
}

impl<E: ChartEngine, S: DataSource> DashboardController<E, S> {
    pub fn new(engine: E, source: S) -> Self {
        Self {
            engine,
            loader: SeriesLoader::new(source),
            presets: ChartPresets::new(),
            registry: WidgetRegistry::standard(),
            main_chart: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn main_chart(&self) -> Option<&E::Handle> {
        self.main_chart.as_ref()
    }

    /// Initialize every registered widget whose container is in `scope`.
    ///
    /// Containers that already carry a chart are left alone, so running this
    /// again over the same fragment is harmless.
    pub fn initialize<Sc: ElementScope + ?Sized>(&mut self, scope: &Sc) -> InitReport {
        let entries: Vec<(String, WidgetKind)> = self
            .registry
            .matching(scope)
            .map(|e| (e.container_id.clone(), e.widget))
            .collect();

        self.initialize_entries(entries)
    }

    /// Like [`DashboardController::initialize`], for the widgets of one page
    pub fn initialize_group<Sc: ElementScope + ?Sized>(
        &mut self,
        group: WidgetGroup,
        scope: &Sc,
    ) -> InitReport {
        let entries: Vec<(String, WidgetKind)> = self
            .registry
            .matching_group(group, scope)
            .map(|e| (e.container_id.clone(), e.widget))
            .collect();

        self.initialize_entries(entries)
    }

    /// Reload the main timeline into the retained chart.
    ///
    /// Returns `Ok(false)` when no main chart has been created.
    pub fn refresh_main_chart(&mut self) -> DashboardResult<bool> {
        let Some(handle) = self.main_chart.as_ref() else {
            debug!("No main chart to refresh");
            return Ok(false);
        };

        let points = self
            .loader
            .load_time_series_points(WidgetKind::MainTimeline.data_element_id());
        self.engine
            .replace_dataset(handle, 0, &main_timeline_data(&points))?;

        debug!("Main chart refreshed with {} points", points.len());
        Ok(true)
    }

    fn initialize_entries(&mut self, entries: Vec<(String, WidgetKind)>) -> InitReport {
        let mut report = InitReport::default();

        for (container_id, widget) in entries {
            if self.engine.has_chart(&container_id) {
                debug!("#{container_id} already has a chart, skipping");
                report.skipped.push(container_id);
                continue;
            }

            match self.initialize_widget(&container_id, widget) {
                Ok(()) => report.created.push(container_id),
                Err(err) => {
                    error!("Failed to initialize #{container_id}: {err}");
                    report.failed.push((container_id, err));
                }
            }
        }

        if !report.created.is_empty() || !report.failed.is_empty() {
            info!(
                "Dashboard initialized: {} created, {} skipped, {} failed",
                report.created.len(),
                report.skipped.len(),
                report.failed.len()
            );
        }

        report
    }

    fn initialize_widget(&mut self, container_id: &str, widget: WidgetKind) -> DashboardResult<()> {
        match widget.build(&self.loader, &self.presets) {
            WidgetSpec::Chart { config } => {
                let handle = self.engine.create_chart(container_id, &config)?;
                if widget == WidgetKind::MainTimeline {
                    self.main_chart = Some(handle);
                }
            }
            WidgetSpec::RegionMap { options, values } => {
                self.engine
                    .create_region_map(container_id, &options, &values)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::IdScope;
    use linkstats_data::StaticSource;
    use linkstats_shared::RegionValues;
    use serde_json::Value;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeEngine {
        charts: HashMap<String, Value>,
        next_handle: usize,
        replaced: Vec<(usize, usize, Value)>,
        fail_on: Option<String>,
    }

    impl ChartEngine for FakeEngine {
        type Handle = usize;

        fn has_chart(&self, container_id: &str) -> bool {
            self.charts.contains_key(container_id)
        }

        fn create_chart(&mut self, container_id: &str, config: &Value) -> DashboardResult<usize> {
            if self.fail_on.as_deref() == Some(container_id) {
                return Err(DashboardError::chart_construction(container_id, "no 2d context"));
            }
            self.charts.insert(container_id.to_string(), config.clone());
            self.next_handle += 1;
            Ok(self.next_handle)
        }

        fn replace_dataset(&mut self, handle: &usize, index: usize, data: &Value) -> DashboardResult<()> {
            self.replaced.push((*handle, index, data.clone()));
            Ok(())
        }

        fn create_region_map(
            &mut self,
            container_id: &str,
            options: &Value,
            _values: &RegionValues,
        ) -> DashboardResult<()> {
            self.charts.insert(container_id.to_string(), options.clone());
            Ok(())
        }
    }

    fn dashboard_source() -> StaticSource {
        StaticSource::new()
            .with("visitOverTime", r#"[{"Time":"2024-03-01T12:00:00Z","Count":5}]"#)
            .with("referrerChartData", r#"[{"Label":"Direct","Value":3}]"#)
    }

    #[test]
    fn test_initialize_creates_present_widgets() {
        let mut controller = DashboardController::new(FakeEngine::default(), dashboard_source());
        let scope: IdScope = ["mainChart", "referrerChart"].into_iter().collect();

        let report = controller.initialize(&scope);

        assert_eq!(report.created, vec!["mainChart", "referrerChart"]);
        assert!(report.is_clean());
        assert_eq!(controller.main_chart(), Some(&1));
    }

    #[test]
    fn test_reinitialize_is_idempotent() {
        let mut controller = DashboardController::new(FakeEngine::default(), StaticSource::new());
        let scope: IdScope = ["clickDistributionChart"].into_iter().collect();

        controller.initialize(&scope);
        let second = controller.initialize(&scope);

        assert_eq!(second.skipped, vec!["clickDistributionChart"]);
        assert!(second.created.is_empty());
        assert_eq!(controller.engine().charts.len(), 1);
        assert_eq!(controller.engine().next_handle, 1);
    }

    #[test]
    fn test_failure_does_not_stop_siblings() {
        let engine = FakeEngine {
            fail_on: Some("mainChart".to_string()),
            ..Default::default()
        };
        let mut controller = DashboardController::new(engine, dashboard_source());
        let scope: IdScope = ["mainChart", "referrerChart"].into_iter().collect();

        let report = controller.initialize(&scope);

        assert_eq!(report.created, vec!["referrerChart"]);
        assert_eq!(report.failed.len(), 1);
        assert!(controller.main_chart().is_none());
    }

    #[test]
    fn test_refresh_without_main_chart() {
        let mut controller = DashboardController::new(FakeEngine::default(), dashboard_source());

        assert_eq!(controller.refresh_main_chart(), Ok(false));
        assert!(controller.engine().replaced.is_empty());
    }

    #[test]
    fn test_refresh_replaces_first_dataset() {
        let mut controller = DashboardController::new(FakeEngine::default(), dashboard_source());
        let scope: IdScope = ["mainChart"].into_iter().collect();
        controller.initialize(&scope);

        assert_eq!(controller.refresh_main_chart(), Ok(true));

        let (handle, index, data) = &controller.engine().replaced[0];
        assert_eq!((*handle, *index), (1, 0));
        assert_eq!(data[0]["y"], 5.0);
    }

    #[test]
    fn test_recreated_main_chart_replaces_handle() {
        let mut controller = DashboardController::new(FakeEngine::default(), dashboard_source());
        let scope: IdScope = ["mainChart"].into_iter().collect();
        controller.initialize(&scope);
        assert_eq!(controller.main_chart(), Some(&1));

        // A swap replaced the canvas, so the old chart is gone
        controller.engine_mut().charts.remove("mainChart");
        let report = controller.initialize(&scope);

        assert_eq!(report.created, vec!["mainChart"]);
        assert_eq!(controller.main_chart(), Some(&2));
        assert_eq!(controller.refresh_main_chart(), Ok(true));
        let (handle, index, _) = &controller.engine().replaced[0];
        assert_eq!((*handle, *index), (2, 0));
    }

    #[test]
    fn test_initialize_group_filters() {
        let mut controller = DashboardController::new(FakeEngine::default(), dashboard_source());
        let scope: IdScope = ["mainChart", "userGrowthChart"].into_iter().collect();

        let report = controller.initialize_group(WidgetGroup::Admin, &scope);

        assert_eq!(report.created, vec!["userGrowthChart"]);
        assert!(controller.main_chart().is_none());
    }
}
