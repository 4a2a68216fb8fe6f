//! Graph data, display options and the tabular dataset fed to column charts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ChartError, ChartResult};

/// Raw graph data as handed over by the page.
///
/// For column charts this is a sequence of `[date, value]` rows; line charts
/// receive it untouched, in whatever shape their library expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphData(Value);

impl GraphData {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The data as a row sequence, or an error if it is not a JSON array
    pub fn rows(&self) -> ChartResult<&[Value]> {
        match &self.0 {
            Value::Array(rows) => Ok(rows),
            other => Err(ChartError::InvalidData {
                message: format!("expected an array of rows, got {}", json_kind(other)),
            }),
        }
    }
}

impl Default for GraphData {
    fn default() -> Self {
        Self(Value::Array(Vec::new()))
    }
}

impl From<Value> for GraphData {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Backend display options, passed through to the charting library unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphOptions(Map<String, Value>);

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-width layout with a fixed pixel height
    pub fn full_width(height_px: u32) -> Self {
        Self::new()
            .with("width", Value::from("100%"))
            .with("height", Value::from(height_px))
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl TryFrom<Value> for GraphOptions {
    type Error = ChartError;

    fn try_from(value: Value) -> ChartResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(ChartError::InvalidConfig {
                message: format!("options must be an object, got {}", json_kind(&other)),
                field: Some("options".to_string()),
            }),
        }
    }
}

/// Column type of a data table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Date,
    Number,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Date => "date",
            ColumnType::Number => "number",
        }
    }
}

/// Declared table column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub column_type: ColumnType,
    pub label: String,
}

/// A single table cell. `Number(None)` marks a date with no data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Date(NaiveDate),
    Number(Option<f64>),
}

impl Cell {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Cell::Date(_) => ColumnType::Date,
            Cell::Number(_) => ColumnType::Number,
        }
    }
}

/// Tabular dataset with typed columns, mirroring a visualization `DataTable`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the two-column `Date|Value` table used by column charts
    pub fn date_value(data: &GraphData) -> ChartResult<Self> {
        let mut table = Self::new();
        table.add_column(ColumnType::Date, "Date");
        table.add_column(ColumnType::Number, "Value");

        let rows = data
            .rows()?
            .iter()
            .enumerate()
            .map(|(index, row)| parse_date_value_row(index, row))
            .collect::<ChartResult<Vec<_>>>()?;

        table.add_rows(rows)?;
        Ok(table)
    }

    pub fn add_column(&mut self, column_type: ColumnType, label: &str) {
        self.columns.push(Column {
            column_type,
            label: label.to_string(),
        });
    }

    pub fn add_row(&mut self, cells: Vec<Cell>) -> ChartResult<()> {
        self.check_row(self.rows.len(), &cells)?;
        self.rows.push(cells);
        Ok(())
    }

    /// Append rows; on error no row is appended
    pub fn add_rows(&mut self, rows: Vec<Vec<Cell>>) -> ChartResult<()> {
        let offset = self.rows.len();
        for (index, cells) in rows.iter().enumerate() {
            self.check_row(offset + index, cells)?;
        }
        self.rows.extend(rows);
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn check_row(&self, row: usize, cells: &[Cell]) -> ChartResult<()> {
        if cells.len() != self.columns.len() {
            return Err(ChartError::RowShape {
                row,
                message: format!(
                    "expected {} cells, got {}",
                    self.columns.len(),
                    cells.len()
                ),
            });
        }

        for (cell, column) in cells.iter().zip(&self.columns) {
            if cell.column_type() != column.column_type {
                return Err(ChartError::RowShape {
                    row,
                    message: format!(
                        "column '{}' expects {}, got {}",
                        column.label,
                        column.column_type.as_str(),
                        cell.column_type().as_str()
                    ),
                });
            }
        }

        Ok(())
    }
}

fn parse_date_value_row(row: usize, value: &Value) -> ChartResult<Vec<Cell>> {
    let shape_error = |message: String| ChartError::RowShape { row, message };

    let cells = value
        .as_array()
        .ok_or_else(|| shape_error(format!("expected [date, value], got {}", json_kind(value))))?;

    let [date, number] = cells.as_slice() else {
        return Err(shape_error(format!("expected 2 cells, got {}", cells.len())));
    };

    let date = date
        .as_str()
        .ok_or_else(|| shape_error(format!("date must be a string, got {}", json_kind(date))))?
        .parse::<NaiveDate>()
        .map_err(|e| shape_error(format!("invalid date: {e}")))?;

    let number = match number {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        other => {
            return Err(shape_error(format!(
                "value must be a number or null, got {}",
                json_kind(other)
            )))
        }
    };

    Ok(vec![Cell::Date(date), Cell::Number(number)])
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
