//! Browser tests, run with `wasm-pack test --headless --firefox crates/wasm-bridge`

#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Reflect};
use serde_json::json;
use trackstats_renderer::ContainerHost;
use trackstats_shared::ContainerLocator;
use trackstats_wasm::dom::{dom_content_loaded, DocumentHost};
use trackstats_wasm::wrappers::js::to_js;
use trackstats_wasm::{
    graph_data_from_statistics, render_chart, render_chart_json, render_from_globals,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn run_js(source: &str) -> JsValue {
    Function::new_no_args(source)
        .call0(&JsValue::NULL)
        .expect("script should run")
}

/// Fake `Chartist.Line` recording constructor arguments in `window.lineCalls`
fn install_fake_chartist() {
    run_js(
        "window.lineCalls = [];
         window.Chartist = { Line: function (el, data, options) {
             window.lineCalls.push({ id: el.id, data: data, options: options });
         } };",
    );
}

fn remove_fake_chartist() {
    run_js("delete window.Chartist; delete window.lineCalls;");
}

/// Fake `google.charts` loader and `google.visualization` column chart
/// recording every call in `window.googleCalls`. Dates are recorded as
/// `[year, month, day]` in local time.
fn install_fake_google() {
    run_js(
        "var calls = { load: [], columns: [], rows: [], draws: [] };
         window.googleCalls = calls;
         function DataTable() {}
         DataTable.prototype.addColumn = function (type, label) {
             calls.columns.push([type, label]);
         };
         DataTable.prototype.addRows = function (rows) {
             rows.forEach(function (row) {
                 var date = row[0];
                 calls.rows.push([date.getFullYear(), date.getMonth(), date.getDate(), row[1]]);
             });
         };
         function ColumnChart(el) { this.id = el.id; }
         ColumnChart.prototype.draw = function (table, options) {
             calls.draws.push({ id: this.id, options: options });
         };
         window.google = {
             charts: { load: function (version, settings) {
                 calls.load.push({ version: version, settings: settings });
                 return Promise.resolve();
             } },
             visualization: { DataTable: DataTable, ColumnChart: ColumnChart }
         };",
    );
}

fn remove_fake_google() {
    run_js("delete window.google; delete window.googleCalls;");
}

fn google_calls() -> serde_json::Value {
    let calls = Reflect::get(&js_sys::global(), &JsValue::from_str("googleCalls")).unwrap();
    serde_wasm_bindgen::from_value(calls).unwrap()
}

fn add_container(id: &str, class: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    element.set_class_name(class);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn line_calls() -> serde_json::Value {
    let calls = Reflect::get(&js_sys::global(), &JsValue::from_str("lineCalls")).unwrap();
    serde_wasm_bindgen::from_value(calls).unwrap()
}

#[wasm_bindgen_test]
fn document_host_finds_by_id_and_selector() {
    let element = add_container("host-test", "host-test-chart");
    let host = DocumentHost::current().unwrap();

    assert!(host
        .find(&ContainerLocator::Id("host-test".to_string()))
        .is_some());
    assert!(host
        .find(&ContainerLocator::Selector(".host-test-chart".to_string()))
        .is_some());
    assert!(host
        .find(&ContainerLocator::Id("not-there".to_string()))
        .is_none());
    assert!(host
        .find(&ContainerLocator::Selector("[[invalid".to_string()))
        .is_none());

    element.remove();
}

#[wasm_bindgen_test]
async fn dom_ready_resolves_on_loaded_document() {
    let host = DocumentHost::current().unwrap();
    dom_content_loaded(host.document()).await;
}

#[wasm_bindgen_test]
async fn line_chart_without_library_is_rejected() {
    let element = add_container("no-library", "no-library-chart");
    let config = json!({
        "backend": "line",
        "container": { "selector": ".no-library-chart" }
    })
    .to_string();

    let error = render_chart_json(config).await.unwrap_err();

    assert!(error.as_string().unwrap().contains("LibraryUnavailable"));
    element.remove();
}

#[wasm_bindgen_test]
async fn line_chart_without_library_or_container_is_skipped() {
    let config = json!({
        "backend": "line",
        "container": { "selector": ".nowhere-chart" }
    })
    .to_string();

    let outcome = render_chart_json(config).await.unwrap();

    assert_eq!(outcome.as_string().as_deref(), Some("skipped"));
}

#[wasm_bindgen_test]
async fn column_chart_without_loader_is_rejected() {
    let config = json!({ "backend": "column", "data": [["2024-01-01", 5]] }).to_string();

    let error = render_chart_json(config).await.unwrap_err();

    assert!(error.as_string().unwrap().contains("google.charts"));
}

#[wasm_bindgen_test]
async fn line_chart_skips_without_container() {
    install_fake_chartist();
    let config = to_js(&json!({
        "backend": "line",
        "container": { "selector": ".no-such-chart" }
    }))
    .unwrap();

    let outcome = render_chart(config).await.unwrap();

    assert_eq!(outcome.as_string().as_deref(), Some("skipped"));
    assert_eq!(line_calls(), json!([]));
    remove_fake_chartist();
}

#[wasm_bindgen_test]
async fn line_chart_passes_data_through() {
    install_fake_chartist();
    let element = add_container("line-test", "line-test-chart");
    let data = json!({ "labels": ["Mon", "Tue"], "series": [[1, 2]] });
    let options = json!({ "fullWidth": true, "height": "200px" });
    let config = json!({
        "backend": "line",
        "data": data,
        "options": options,
        "container": { "selector": ".line-test-chart" }
    })
    .to_string();

    let outcome = render_chart_json(config).await.unwrap();

    assert_eq!(outcome.as_string().as_deref(), Some("rendered"));
    assert_eq!(
        line_calls(),
        json!([{ "id": "line-test", "data": data, "options": options }])
    );
    element.remove();
    remove_fake_chartist();
}

#[wasm_bindgen_test]
fn statistics_become_graph_rows() {
    let query = to_js(&json!({
        "metric": "signups",
        "from_date": "2024-01-01",
        "to_date": "2024-01-02"
    }))
    .unwrap();
    let statistics = to_js(&json!([
        { "metric": "signups", "date": "2024-01-02", "period": 86400, "value": 7 },
        { "metric": "signups", "date": "2024-01-01", "period": 86400, "value": 5 },
        { "metric": "signups", "date": "2024-01-09", "period": 86400, "value": 1 }
    ]))
    .unwrap();

    let rows = graph_data_from_statistics(query, statistics).unwrap();
    let rows: serde_json::Value = serde_wasm_bindgen::from_value(rows).unwrap();

    assert_eq!(rows, json!([["2024-01-01", 5], ["2024-01-02", 7]]));
}

#[wasm_bindgen_test]
async fn column_chart_draws_through_google_visualization() {
    install_fake_google();
    let element = add_container("trackstats-graph", "");
    let options = json!({ "width": "100%", "height": 300 });
    let config = json!({
        "backend": "column",
        "data": [["2024-01-01", 5], ["2024-02-29", null]],
        "options": options
    })
    .to_string();

    let outcome = render_chart_json(config).await.unwrap();

    assert_eq!(outcome.as_string().as_deref(), Some("rendered"));
    let calls = google_calls();
    assert_eq!(
        calls["load"],
        json!([{ "version": "current", "settings": { "packages": ["corechart"] } }])
    );
    assert_eq!(calls["columns"], json!([["date", "Date"], ["number", "Value"]]));
    assert_eq!(calls["rows"], json!([[2024, 0, 1, 5], [2024, 1, 29, null]]));
    assert_eq!(
        calls["draws"],
        json!([{ "id": "trackstats-graph", "options": options }])
    );
    element.remove();
    remove_fake_google();
}

#[wasm_bindgen_test]
async fn legacy_globals_render_as_column_chart() {
    install_fake_google();
    let element = add_container("trackstats-graph", "");
    run_js(
        "window.graphData = [[new Date(2024, 0, 1), 5], [new Date(2024, 11, 31), 7]];
         window.graphOptions = { width: '100%', height: 300 };",
    );

    let outcome = render_from_globals("column".to_string()).await.unwrap();

    assert_eq!(outcome.as_string().as_deref(), Some("rendered"));
    let calls = google_calls();
    assert_eq!(calls["rows"], json!([[2024, 0, 1, 5], [2024, 11, 31, 7]]));
    assert_eq!(
        calls["draws"],
        json!([{ "id": "trackstats-graph", "options": { "width": "100%", "height": 300 } }])
    );
    run_js("delete window.graphData; delete window.graphOptions;");
    element.remove();
    remove_fake_google();
}
