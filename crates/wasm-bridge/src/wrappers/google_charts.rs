//! Google Visualization column charts

use chrono::Datelike;
use futures::future::LocalBoxFuture;
use js_sys::{Array, Promise};
use serde_json::json;
use trackstats_renderer::ColumnChartLibrary;
use trackstats_shared::{Cell, ChartError, ChartResult, DataTable, GraphOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

use super::js::{lookup_global, to_js};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "charts"], js_name = load, catch)]
    fn charts_load(version: &str, settings: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["google", "visualization"], js_name = DataTable)]
    type VisualizationDataTable;

    #[wasm_bindgen(
        constructor,
        js_namespace = ["google", "visualization"],
        js_class = "DataTable",
        catch
    )]
    fn new() -> Result<VisualizationDataTable, JsValue>;

    #[wasm_bindgen(method, js_name = addColumn, catch)]
    fn add_column(
        this: &VisualizationDataTable,
        column_type: &str,
        label: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = addRows, catch)]
    fn add_rows(this: &VisualizationDataTable, rows: &Array) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["google", "visualization"], js_name = ColumnChart)]
    type VisualizationColumnChart;

    #[wasm_bindgen(
        constructor,
        js_namespace = ["google", "visualization"],
        js_class = "ColumnChart",
        catch
    )]
    fn new(container: &Element) -> Result<VisualizationColumnChart, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn draw(
        this: &VisualizationColumnChart,
        data: &VisualizationDataTable,
        options: &JsValue,
    ) -> Result<(), JsValue>;
}

/// The Google Visualization loader and its `corechart` package
pub struct GoogleVisualization {
    version: String,
}

impl GoogleVisualization {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
        }
    }

    fn to_visualization_table(table: &DataTable) -> ChartResult<VisualizationDataTable> {
        let data = VisualizationDataTable::new()?;
        for column in table.columns() {
            data.add_column(column.column_type.as_str(), &column.label)?;
        }

        let rows = Array::new();
        for row in table.rows() {
            let cells: Array = row.iter().map(cell_to_js).collect();
            rows.push(&cells);
        }
        data.add_rows(&rows)?;

        Ok(data)
    }
}

impl Default for GoogleVisualization {
    fn default() -> Self {
        Self::new("current")
    }
}

impl ColumnChartLibrary for GoogleVisualization {
    type Element = Element;

    fn name(&self) -> &str {
        "google.charts"
    }

    fn load(&self) -> LocalBoxFuture<'_, ChartResult<()>> {
        Box::pin(async move {
            if lookup_global(&["google", "charts", "load"]).is_none() {
                return Err(ChartError::LibraryUnavailable {
                    library: self.name().to_string(),
                });
            }

            let settings = to_js(&json!({ "packages": ["corechart"] }))?;
            let promise = charts_load(&self.version, &settings)?;
            JsFuture::from(promise).await?;

            log::debug!("Google Visualization {} loaded", self.version);
            Ok(())
        })
    }

    fn draw(
        &self,
        container: &Element,
        table: &DataTable,
        options: &GraphOptions,
    ) -> ChartResult<()> {
        let data = Self::to_visualization_table(table)?;
        let chart = VisualizationColumnChart::new(container)?;
        chart.draw(&data, &to_js(options)?)?;
        Ok(())
    }
}

fn cell_to_js(cell: &Cell) -> JsValue {
    match cell {
        // JS months are zero based
        Cell::Date(date) => js_sys::Date::new_with_year_month_day(
            date.year() as u32,
            date.month0() as i32,
            date.day() as i32,
        )
        .into(),
        Cell::Number(Some(value)) => JsValue::from_f64(*value),
        Cell::Number(None) => JsValue::NULL,
    }
}
