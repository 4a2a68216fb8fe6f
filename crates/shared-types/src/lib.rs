//! Shared types for Trackstats charts
//!
//! This crate contains the types shared between the renderer and the
//! wasm-bridge crates: graph data and options, the column chart data table,
//! chart configuration, errors, and the statistics that graph rows are
//! built from.

pub mod chart_config;
pub mod data_types;
pub mod errors;
pub mod statistics;

pub use chart_config::{
    BackendKind, ChartConfig, ContainerLocator, MissingContainerPolicy,
    DEFAULT_COLUMN_CONTAINER_ID, DEFAULT_LINE_CONTAINER_SELECTOR,
};
pub use data_types::{Cell, Column, ColumnType, DataTable, GraphData, GraphOptions};
pub use errors::{ChartError, ChartResult, ErrorResponse};
pub use statistics::{GraphQuery, Period, Statistic};

/// Outcome of a render attempt that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderOutcome {
    Rendered,
    /// The container was absent and the policy was to skip
    Skipped,
}
