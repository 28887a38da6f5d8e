//! The dashboard widgets and how their chart configurations are built

use linkstats_config::presets::palette;
use linkstats_config::ChartPresets;
use linkstats_data::{format_day_label, DataSource, SeriesLoader};
use linkstats_shared::{ChartKind, NormalizedSeries, RegionValues, TimePoint};
use serde_json::{json, Value};

/// Page that initializes a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetGroup {
    Dashboard,
    Analytics,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Clicks over time; the one chart that is refreshed in place
    MainTimeline,
    Referrers,
    VisitorMap,
    DailyVisitors,
    ClickDistribution,
    UserGrowth,
    UrlTrends,
    DailyActiveUsers,
}

/// What the controller has to construct for a widget
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetSpec {
    Chart { config: Value },
    RegionMap { options: Value, values: RegionValues },
}

const SAMPLE_BREAKDOWN: [(&str, f64); 5] = [
    ("Direct", 35.0),
    ("Social Media", 25.0),
    ("Search Engines", 20.0),
    ("Email", 15.0),
    ("Other", 5.0),
];

const SAMPLE_WEEKLY_ACTIVE: [(&str, f64); 7] = [
    ("Mon", 3200.0),
    ("Tue", 3800.0),
    ("Wed", 4200.0),
    ("Thu", 4500.0),
    ("Fri", 4100.0),
    ("Sat", 2800.0),
    ("Sun", 2400.0),
];

impl WidgetKind {
    pub const ALL: [WidgetKind; 8] = [
        WidgetKind::MainTimeline,
        WidgetKind::Referrers,
        WidgetKind::VisitorMap,
        WidgetKind::DailyVisitors,
        WidgetKind::ClickDistribution,
        WidgetKind::UserGrowth,
        WidgetKind::UrlTrends,
        WidgetKind::DailyActiveUsers,
    ];

    /// Canvas (or map container) the widget is drawn into by default
    pub fn container_id(&self) -> &'static str {
        match self {
            WidgetKind::MainTimeline => "mainChart",
            WidgetKind::Referrers => "referrerChart",
            WidgetKind::VisitorMap => "jvm-map",
            WidgetKind::DailyVisitors => "dailyUniqueVisitorsChart",
            WidgetKind::ClickDistribution => "clickDistributionChart",
            WidgetKind::UserGrowth => "userGrowthChart",
            WidgetKind::UrlTrends => "urlTrendsChart",
            WidgetKind::DailyActiveUsers => "dailyActiveUsersChart",
        }
    }

    /// Element carrying the widget's embedded JSON
    pub fn data_element_id(&self) -> &'static str {
        match self {
            WidgetKind::MainTimeline => "visitOverTime",
            WidgetKind::Referrers => "referrerChartData",
            WidgetKind::VisitorMap => "locationData",
            WidgetKind::DailyVisitors => "dailyUniqueVisitorsData",
            WidgetKind::ClickDistribution => "clickDistributionData",
            WidgetKind::UserGrowth => "userGrowthChartData",
            WidgetKind::UrlTrends => "urlTrendsChartData",
            WidgetKind::DailyActiveUsers => "dailyActiveUsersData",
        }
    }

    pub fn groups(&self) -> &'static [WidgetGroup] {
        match self {
            WidgetKind::MainTimeline | WidgetKind::Referrers | WidgetKind::VisitorMap => {
                &[WidgetGroup::Dashboard]
            }
            WidgetKind::DailyVisitors => &[WidgetGroup::Analytics],
            WidgetKind::ClickDistribution => &[WidgetGroup::Analytics, WidgetGroup::Admin],
            WidgetKind::UserGrowth | WidgetKind::UrlTrends | WidgetKind::DailyActiveUsers => {
                &[WidgetGroup::Admin]
            }
        }
    }

    pub fn belongs_to(&self, group: WidgetGroup) -> bool {
        self.groups().contains(&group)
    }

    pub fn build<S: DataSource>(&self, loader: &SeriesLoader<S>, presets: &ChartPresets) -> WidgetSpec {
        let id = self.data_element_id();

        let config = match self {
            WidgetKind::MainTimeline => main_timeline_config(&loader.load_time_series_points(id)),
            WidgetKind::Referrers => referrers_config(presets, loader.load_series(id)),
            WidgetKind::VisitorMap => {
                let values = loader.load_region_values(id);
                return WidgetSpec::RegionMap {
                    options: region_map_options(&values),
                    values,
                };
            }
            WidgetKind::DailyVisitors => daily_visitors_config(presets, day_labeled(loader.load_series(id))),
            WidgetKind::ClickDistribution => {
                click_distribution_config(presets, series_or_sample(loader, id, &SAMPLE_BREAKDOWN))
            }
            WidgetKind::UserGrowth => user_growth_config(
                day_labeled(loader.load_series(id)),
                loader.load_series("totalUserChartData"),
            ),
            WidgetKind::UrlTrends => url_trends_config(presets, day_labeled(loader.load_series(id))),
            WidgetKind::DailyActiveUsers => daily_active_users_config(
                presets,
                day_labeled(series_or_sample(loader, id, &SAMPLE_WEEKLY_ACTIVE)),
            ),
        };

        WidgetSpec::Chart { config }
    }
}

fn day_labeled(series: NormalizedSeries) -> NormalizedSeries {
    series.map_labels(format_day_label)
}

fn series_or_sample<S: DataSource>(
    loader: &SeriesLoader<S>,
    element_id: &str,
    sample: &[(&str, f64)],
) -> NormalizedSeries {
    if loader.has_element(element_id) {
        loader.load_series(element_id)
    } else {
        log::debug!("#{element_id} absent, using sample data");
        NormalizedSeries::from_pairs(sample.iter().copied())
    }
}

/// Dataset 0 of the main timeline
pub fn main_timeline_data(points: &[TimePoint]) -> Value {
    json!(points)
}

fn main_timeline_config(points: &[TimePoint]) -> Value {
    let data = json!({
        "datasets": [{
            "label": "Clicks",
            "data": main_timeline_data(points),
            "borderColor": palette::INDIGO,
            "backgroundColor": palette::INDIGO_FILL,
            "borderWidth": 2,
            "tension": 0.4,
            "fill": true,
            "pointRadius": 0,
            "pointHoverRadius": 6
        }]
    });
    let tick_font = json!({ "font": { "size": 11 } });
    let options = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": { "legend": { "display": false } },
        "scales": {
            "y": {
                "beginAtZero": true,
                "grid": { "borderDash": [2, 4], "color": palette::GRID },
                "ticks": tick_font
            },
            "x": {
                "type": "time",
                "time": { "unit": "hour" },
                "grid": { "display": false },
                "ticks": tick_font
            }
        },
        "interaction": { "intersect": false, "mode": "index" }
    });

    ChartPresets::standalone_config(ChartKind::Line, data, options)
}

fn referrers_config(presets: &ChartPresets, series: NormalizedSeries) -> Value {
    let data = json!({
        "labels": series.labels(),
        "datasets": [{
            "data": series.data(),
            "backgroundColor": palette::REFERRER_SLICES,
            "borderWidth": 0,
            "hoverOffset": 4
        }]
    });

    presets.chart_config(
        ChartKind::Doughnut,
        data,
        json!({ "cutout": "75%", "plugins": { "legend": { "display": false } } }),
    )
}

fn region_map_options(values: &RegionValues) -> Value {
    json!({
        "map": "world",
        "visualizeData": {
            "scale": palette::MAP_SCALE,
            "values": values
        },
        "zoomButtons": false
    })
}

fn daily_visitors_config(presets: &ChartPresets, series: NormalizedSeries) -> Value {
    let data = json!({
        "labels": series.labels(),
        "datasets": [{
            "label": "Unique Visitors",
            "data": series.data(),
            "backgroundColor": palette::EMERALD_FILL,
            "borderColor": palette::EMERALD,
            "borderWidth": 2,
            "tension": 0.3,
            "fill": true
        }]
    });

    presets.chart_config(ChartKind::Line, data, json!({}))
}

fn click_distribution_config(presets: &ChartPresets, series: NormalizedSeries) -> Value {
    let data = json!({
        "labels": series.labels(),
        "datasets": [{
            "data": series.data(),
            "backgroundColor": palette::BREAKDOWN_SLICES,
            "borderWidth": 1
        }]
    });

    presets.chart_config(ChartKind::Doughnut, data, json!({}))
}

fn user_growth_config(new_users: NormalizedSeries, total_users: NormalizedSeries) -> Value {
    let data = json!({
        "labels": new_users.labels(),
        "datasets": [
            {
                "label": "New Users",
                "data": new_users.data(),
                "backgroundColor": palette::INDIGO_SOFT_FILL,
                "borderColor": palette::INDIGO_SOFT,
                "borderWidth": 2,
                "tension": 0.3,
                "fill": true,
                "yAxisID": "left"
            },
            {
                "label": "Total Users",
                "data": total_users.data(),
                "backgroundColor": palette::TEAL_FILL,
                "borderColor": palette::TEAL,
                "borderWidth": 2,
                "tension": 0.3,
                "fill": true,
                "yAxisID": "right"
            }
        ]
    });
    // Two value axes; the preset `y` axis would add a third
    let options = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "scales": {
            "left": { "position": "left", "beginAtZero": true },
            "right": { "position": "right", "beginAtZero": true }
        }
    });

    ChartPresets::standalone_config(ChartKind::Line, data, options)
}

fn url_trends_config(presets: &ChartPresets, series: NormalizedSeries) -> Value {
    let data = json!({
        "labels": series.labels(),
        "datasets": [{
            "label": "URLs Created",
            "data": series.data(),
            "backgroundColor": palette::VIOLET_FILL,
            "borderColor": palette::VIOLET,
            "borderWidth": 1
        }]
    });

    presets.chart_config(ChartKind::Bar, data, json!({}))
}

fn daily_active_users_config(presets: &ChartPresets, series: NormalizedSeries) -> Value {
    let data = json!({
        "labels": series.labels(),
        "datasets": [{
            "label": "Active Users",
            "data": series.data(),
            "backgroundColor": palette::EMERALD_FILL,
            "borderColor": palette::EMERALD,
            "borderWidth": 2,
            "tension": 0.3,
            "fill": true
        }]
    });

    presets.chart_config(ChartKind::Line, data, json!({}))
}
