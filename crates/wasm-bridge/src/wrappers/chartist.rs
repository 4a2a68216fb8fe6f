//! Chartist line charts

use trackstats_renderer::LineChartLibrary;
use trackstats_shared::{ChartResult, GraphData, GraphOptions};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::js::{lookup_global, to_js};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Chartist, js_name = Line)]
    type ChartistLine;

    #[wasm_bindgen(constructor, js_namespace = Chartist, js_class = "Line", catch)]
    fn new(
        container: &Element,
        data: &JsValue,
        options: &JsValue,
    ) -> Result<ChartistLine, JsValue>;
}

/// `Chartist.Line`, expected to be loaded by the page
#[derive(Default)]
pub struct Chartist;

impl LineChartLibrary for Chartist {
    type Element = Element;

    fn name(&self) -> &str {
        "Chartist"
    }

    fn is_available(&self) -> bool {
        lookup_global(&["Chartist", "Line"]).is_some()
    }

    fn construct(
        &self,
        container: &Element,
        data: &GraphData,
        options: &GraphOptions,
    ) -> ChartResult<()> {
        // Chartist keeps its own reference to the chart through the container.
        ChartistLine::new(container, &to_js(data)?, &to_js(options)?)?;
        Ok(())
    }
}
