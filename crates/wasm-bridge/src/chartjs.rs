//! Chart.js and jsVectorMap bindings
//!
//! Both libraries are expected as page globals (`Chart`, `jsVectorMap`).

use js_sys::Reflect;
use linkstats_integration::ChartEngine;
use linkstats_shared::{DashboardError, DashboardResult, RegionValues};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{id_selector, BrowserDocument};

#[wasm_bindgen]
extern "C" {
    /// A Chart.js instance
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &Element, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(static_method_of = ChartJs, js_class = "Chart", js_name = getChart)]
    fn get_chart(canvas: &Element) -> Option<ChartJs>;

    #[wasm_bindgen(method, getter)]
    fn data(this: &ChartJs) -> JsValue;

    #[wasm_bindgen(method)]
    fn update(this: &ChartJs);

    #[wasm_bindgen(js_name = jsVectorMap)]
    type VectorMap;

    #[wasm_bindgen(constructor, js_class = "jsVectorMap", catch)]
    fn new(options: &JsValue) -> Result<VectorMap, JsValue>;

    type RegionTooltip;

    #[wasm_bindgen(method, js_name = text)]
    fn get_text(this: &RegionTooltip) -> String;

    #[wasm_bindgen(method, js_name = text)]
    fn set_text(this: &RegionTooltip, text: &str);
}

/// Plain JS objects, never `Map`s, so the libraries can read the configuration
pub fn to_js(value: &Value) -> DashboardResult<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| DashboardError::JsInterop {
            message: e.to_string(),
        })
}

pub struct ChartJsEngine {
    page: BrowserDocument,
}

impl ChartJsEngine {
    pub fn new(page: BrowserDocument) -> Self {
        Self { page }
    }

    fn container(&self, container_id: &str) -> DashboardResult<Element> {
        self.page
            .element(container_id)
            .ok_or_else(|| DashboardError::ElementNotFound {
                id: container_id.to_string(),
            })
    }
}

impl ChartEngine for ChartJsEngine {
    type Handle = ChartJs;

    fn has_chart(&self, container_id: &str) -> bool {
        let Some(container) = self.page.element(container_id) else {
            return false;
        };

        // maps render into a container element, charts into a canvas
        if container.tag_name().eq_ignore_ascii_case("canvas") {
            ChartJs::get_chart(&container).is_some()
        } else {
            container.child_element_count() > 0
        }
    }

    fn create_chart(&mut self, container_id: &str, config: &Value) -> DashboardResult<ChartJs> {
        let canvas = self.container(container_id)?;
        let config = to_js(config)?;

        ChartJs::new(&canvas, &config).map_err(|e| {
            DashboardError::chart_construction(container_id, DashboardError::from(e).to_string())
        })
    }

    fn replace_dataset(&mut self, handle: &ChartJs, dataset_index: usize, data: &Value) -> DashboardResult<()> {
        let datasets = Reflect::get(&handle.data(), &JsValue::from_str("datasets"))?;
        let dataset = Reflect::get_u32(&datasets, dataset_index as u32)?;
        if dataset.is_undefined() {
            return Err(DashboardError::JsInterop {
                message: format!("Chart has no dataset {dataset_index}"),
            });
        }

        Reflect::set(&dataset, &JsValue::from_str("data"), &to_js(data)?)?;
        handle.update();
        Ok(())
    }

    fn create_region_map(
        &mut self,
        container_id: &str,
        options: &Value,
        values: &RegionValues,
    ) -> DashboardResult<()> {
        self.container(container_id)?;
        let options = to_js(options)?;
        Reflect::set(
            &options,
            &JsValue::from_str("selector"),
            &JsValue::from_str(&id_selector(container_id)),
        )?;

        let counts = values.clone();
        let on_tooltip = Closure::<dyn Fn(JsValue, RegionTooltip, String)>::new(
            move |_event: JsValue, tooltip: RegionTooltip, code: String| {
                let count = counts.get(&code).copied().unwrap_or(0.0);
                tooltip.set_text(&format!("{} ({})", tooltip.get_text(), count));
            },
        );
        // lives as long as the map, which lives as long as the page
        Reflect::set(
            &options,
            &JsValue::from_str("onRegionTooltipShow"),
            &on_tooltip.into_js_value(),
        )?;

        VectorMap::new(&options)
            .map(|_| ())
            .map_err(|e| DashboardError::chart_construction(container_id, DashboardError::from(e).to_string()))
    }
}
