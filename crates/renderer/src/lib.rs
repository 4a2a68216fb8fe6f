//! Chart rendering for Trackstats graphs
//!
//! This crate decides what gets drawn where: it waits for the page, picks the
//! container, builds the backend dataset and hands it to a charting library.
//! The libraries and the document are behind traits so the same logic runs in
//! the browser bridge and in native tests.

pub mod chart_renderers;
pub mod container;
pub mod render_engine;

pub use chart_renderers::{
    ChartBackend, ColumnChart, ColumnChartLibrary, ConfiguredBackend, LineChart,
    LineChartLibrary,
};
pub use container::ContainerHost;
pub use render_engine::ChartRenderer;
