use js_sys::{Array, Date, Reflect};
use serde::Serialize;
use trackstats_shared::{ChartError, ChartResult};
use wasm_bindgen::{JsCast, JsValue};

/// Walk a dotted path from the global object, e.g. `["google", "charts"]`.
/// Returns `None` as soon as a segment is undefined or null.
pub fn lookup_global(path: &[&str]) -> Option<JsValue> {
    let mut current: JsValue = js_sys::global().into();
    for segment in path {
        current = Reflect::get(&current, &JsValue::from_str(segment)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// Convert to a plain JS value; maps become objects rather than `Map`s
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> ChartResult<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ChartError::JsInterop {
            message: format!("Failed to convert to JS: {e}"),
        })
}

/// Replace `Date` objects inside legacy `[date, value]` rows with ISO date
/// strings so the rows deserialize like any other graph data.
pub fn normalize_legacy_rows(rows: &JsValue) -> JsValue {
    if !Array::is_array(rows) {
        return rows.clone();
    }

    let normalized = Array::new();
    for row in Array::from(rows).iter() {
        if !Array::is_array(&row) {
            normalized.push(&row);
            continue;
        }

        let cells = Array::new();
        for cell in Array::from(&row).iter() {
            match cell.dyn_ref::<Date>() {
                Some(date) => cells.push(&JsValue::from_str(&iso_date(date))),
                None => cells.push(&cell),
            };
        }
        normalized.push(&cells);
    }
    normalized.into()
}

// Legacy pages build dates with `new Date(y, m, d)`, so read them in local time.
fn iso_date(date: &Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}
