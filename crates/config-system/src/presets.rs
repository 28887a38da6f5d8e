//! Chart style presets
//!
//! Every chart kind has a set of default Chart.js options. Widgets pass their
//! own overrides, which are deep-merged on top of the defaults.

use std::collections::HashMap;

use linkstats_shared::ChartKind;
use serde_json::{json, Value};

/// Colors shared by the dashboard charts
pub mod palette {
    pub const INDIGO: &str = "#4f46e5";
    pub const INDIGO_FILL: &str = "rgba(79, 70, 229, 0.05)";
    pub const GRID: &str = "#f1f5f9";

    pub const REFERRER_SLICES: [&str; 5] = ["#6366f1", "#a5b4fc", "#c7d2fe", "#e0e7ff", "#312e81"];

    pub const BREAKDOWN_SLICES: [&str; 5] = [
        "rgba(99, 102, 241, 0.8)",
        "rgba(139, 92, 246, 0.8)",
        "rgba(59, 130, 246, 0.8)",
        "rgba(16, 185, 129, 0.8)",
        "rgba(245, 158, 11, 0.8)",
    ];

    pub const EMERALD_FILL: &str = "rgba(16, 185, 129, 0.2)";
    pub const EMERALD: &str = "rgba(16, 185, 129, 1)";
    pub const INDIGO_SOFT_FILL: &str = "rgba(99, 102, 241, 0.2)";
    pub const INDIGO_SOFT: &str = "rgba(99, 102, 241, 1)";
    pub const TEAL_FILL: &str = "rgba(24, 196, 157, 0.2)";
    pub const TEAL: &str = "rgba(24, 196, 157, 1)";
    pub const VIOLET_FILL: &str = "rgba(139, 92, 246, 0.8)";
    pub const VIOLET: &str = "rgba(139, 92, 246, 1)";

    /// World map gradient, low to high visit counts
    pub const MAP_SCALE: [&str; 2] = ["#a5b4fc", "#4338ca"];
}

/// Default options per chart kind
pub struct ChartPresets {
    defaults: HashMap<ChartKind, Value>,
}

impl Default for ChartPresets {
    fn default() -> Self {
        let mut defaults = HashMap::new();

        let axis_defaults = json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "y": { "beginAtZero": true } }
        });
        let slice_defaults = json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "position": "bottom" } }
        });

        defaults.insert(ChartKind::Line, axis_defaults.clone());
        defaults.insert(ChartKind::Bar, axis_defaults);
        defaults.insert(ChartKind::Doughnut, slice_defaults.clone());
        defaults.insert(ChartKind::Pie, slice_defaults);

        Self { defaults }
    }
}

impl ChartPresets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_options(&self, kind: ChartKind) -> Value {
        self.defaults.get(&kind).cloned().unwrap_or_else(|| json!({}))
    }

    /// Defaults of `kind` with `overrides` merged on top
    pub fn options(&self, kind: ChartKind, overrides: Value) -> Value {
        let mut options = self.base_options(kind);
        Self::merge_json(&mut options, overrides);
        options
    }

    /// Full constructor argument: `{type, data, options}` with preset options
    pub fn chart_config(&self, kind: ChartKind, data: Value, overrides: Value) -> Value {
        Self::standalone_config(kind, data, self.options(kind, overrides))
    }

    /// Constructor argument whose options are used verbatim
    pub fn standalone_config(kind: ChartKind, data: Value, options: Value) -> Value {
        json!({
            "type": kind,
            "data": data,
            "options": options,
        })
    }

    /// Recursively merge `overrides` into `base`; non-object values replace
    pub fn merge_json(base: &mut Value, overrides: Value) {
        match (base, overrides) {
            (Value::Object(base_map), Value::Object(override_map)) => {
                for (key, value) in override_map {
                    match base_map.get_mut(&key) {
                        Some(base_value) => Self::merge_json(base_value, value),
                        None => {
                            base_map.insert(key, value);
                        }
                    }
                }
            }
            (base, override_value) => {
                *base = override_value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_defaults() {
        let presets = ChartPresets::new();
        let options = presets.base_options(ChartKind::Line);

        assert_eq!(options["maintainAspectRatio"], false);
        assert_eq!(options["scales"]["y"]["beginAtZero"], true);
    }

    #[test]
    fn test_overrides_are_deep_merged() {
        let presets = ChartPresets::new();
        let options = presets.options(
            ChartKind::Doughnut,
            json!({"cutout": "75%", "plugins": {"legend": {"display": false}}}),
        );

        assert_eq!(options["cutout"], "75%");
        assert_eq!(options["plugins"]["legend"]["display"], false);
        assert_eq!(options["plugins"]["legend"]["position"], "bottom");
        assert_eq!(options["responsive"], true);
    }

    #[test]
    fn test_chart_config_shape() {
        let presets = ChartPresets::new();
        let config = presets.chart_config(
            ChartKind::Bar,
            json!({"labels": ["Mar 1"], "datasets": []}),
            json!({}),
        );

        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"][0], "Mar 1");
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
    }

    #[test]
    fn test_standalone_config_keeps_options() {
        let config = ChartPresets::standalone_config(
            ChartKind::Line,
            json!({"datasets": []}),
            json!({"scales": {"left": {"position": "left"}}}),
        );

        assert!(config["options"]["scales"].get("y").is_none());
    }

    #[test]
    fn test_merge_replaces_scalars_and_arrays() {
        let mut base = json!({"a": 1, "b": [1, 2], "c": {"d": true}});
        ChartPresets::merge_json(&mut base, json!({"a": 2, "b": [3], "c": {"e": false}}));

        assert_eq!(base, json!({"a": 2, "b": [3], "c": {"d": true, "e": false}}));
    }
}
