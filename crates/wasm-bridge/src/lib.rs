//! WASM bridge for Trackstats charts
//! Binds the chart renderer to the page document and the charting libraries
//! loaded alongside it.

use trackstats_renderer::{ChartRenderer, ConfiguredBackend};
use trackstats_shared::{
    BackendKind, ChartConfig, ChartError, ChartResult, ErrorResponse, GraphData, GraphOptions,
    GraphQuery, RenderOutcome, Statistic,
};
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod wrappers;

use dom::{dom_content_loaded, DocumentHost};
use wrappers::js::{lookup_global, normalize_legacy_rows, to_js};
use wrappers::{Chartist, GoogleVisualization};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Ignore the error if a logger is already installed
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("Trackstats charts initialized");
}

/// Render the chart described by a config object.
///
/// Resolves to `"rendered"` or `"skipped"`; rejects with a JSON error response.
#[wasm_bindgen(js_name = renderChart)]
pub async fn render_chart(config: JsValue) -> Result<JsValue, JsValue> {
    let config = serde_wasm_bindgen::from_value::<ChartConfig>(config).map_err(|e| {
        error_to_js(
            ChartError::InvalidConfig {
                message: e.to_string(),
                field: None,
            },
            "renderChart",
        )
    })?;
    render_config(config, "renderChart").await
}

/// Same as `renderChart` with the config given as a JSON string
#[wasm_bindgen(js_name = renderChartJson)]
pub async fn render_chart_json(json: String) -> Result<JsValue, JsValue> {
    let config = ChartConfig::from_json(&json).map_err(|e| error_to_js(e, "renderChartJson"))?;
    render_config(config, "renderChartJson").await
}

/// Render from the `graphData` and `graphOptions` globals set by older pages
#[wasm_bindgen(js_name = renderFromGlobals)]
pub async fn render_from_globals(backend: String) -> Result<JsValue, JsValue> {
    let config =
        config_from_globals(&backend).map_err(|e| error_to_js(e, "renderFromGlobals"))?;
    render_config(config, "renderFromGlobals").await
}

/// Column chart rows for the statistics matching a graph query
#[wasm_bindgen(js_name = graphDataFromStatistics)]
pub fn graph_data_from_statistics(
    query: JsValue,
    statistics: JsValue,
) -> Result<JsValue, JsValue> {
    let operation = "graphDataFromStatistics";
    let result = (|| -> ChartResult<JsValue> {
        let query: GraphQuery = from_js(query)?;
        query.validate()?;
        let statistics: Vec<Statistic> = from_js(statistics)?;
        to_js(&query.graph_data(&statistics))
    })();
    result.map_err(|e| error_to_js(e, operation))
}

async fn render_config(config: ChartConfig, operation: &str) -> Result<JsValue, JsValue> {
    let outcome = render_with_document(&config)
        .await
        .map_err(|e| error_to_js(e, operation))?;
    to_js(&outcome).map_err(|e| error_to_js(e, operation))
}

async fn render_with_document(config: &ChartConfig) -> ChartResult<RenderOutcome> {
    let host = DocumentHost::current()?;
    let backend =
        ConfiguredBackend::select(config.backend, GoogleVisualization::default(), Chartist);
    let renderer = ChartRenderer::new(&host, backend);
    renderer.render(dom_content_loaded(host.document()), config).await
}

fn config_from_globals(backend: &str) -> ChartResult<ChartConfig> {
    let backend: BackendKind = backend.parse()?;

    let raw_data = lookup_global(&["graphData"]).ok_or_else(|| ChartError::InvalidConfig {
        message: "graphData is not defined".to_string(),
        field: Some("data".to_string()),
    })?;
    let raw_data = match backend {
        BackendKind::Column => normalize_legacy_rows(&raw_data),
        BackendKind::Line => raw_data,
    };
    let data = GraphData::new(from_js(raw_data)?);

    let options = match lookup_global(&["graphOptions"]) {
        Some(raw) => GraphOptions::try_from(from_js::<serde_json::Value>(raw)?)?,
        None => GraphOptions::new(),
    };

    Ok(ChartConfig::new(backend, data, options))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> ChartResult<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ChartError::InvalidData {
        message: e.to_string(),
    })
}

fn error_to_js(error: ChartError, operation: &str) -> JsValue {
    log::error!("{operation} failed: {error}");
    JsValue::from_str(
        &ErrorResponse::new(error)
            .with_context("ChartRenderer", operation)
            .to_json(),
    )
}
