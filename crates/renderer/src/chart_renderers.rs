//! Chart backend implementations

use futures::future::LocalBoxFuture;
use trackstats_shared::{BackendKind, ChartResult, GraphData, GraphOptions};

/// Trait for all chart backends
pub trait ChartBackend {
    /// Document element the chart renders into
    type Element;

    /// Which backend this is
    fn kind(&self) -> BackendKind;

    /// Resolves once the backend's charting library can draw
    fn ready(&self) -> LocalBoxFuture<'_, ChartResult<()>>;

    /// Render the chart into the container
    fn render(
        &self,
        container: &Self::Element,
        data: &GraphData,
        options: &GraphOptions,
    ) -> ChartResult<()>;
}

impl<B: ChartBackend + ?Sized> ChartBackend for Box<B> {
    type Element = B::Element;

    fn kind(&self) -> BackendKind {
        (**self).kind()
    }

    fn ready(&self) -> LocalBoxFuture<'_, ChartResult<()>> {
        (**self).ready()
    }

    fn render(
        &self,
        container: &Self::Element,
        data: &GraphData,
        options: &GraphOptions,
    ) -> ChartResult<()> {
        (**self).render(container, data, options)
    }
}

mod column_chart;
mod line_chart;

pub use column_chart::{ColumnChart, ColumnChartLibrary};
pub use line_chart::{LineChart, LineChartLibrary};

/// Backend picked from configuration; only one is active per page
pub enum ConfiguredBackend<C, L> {
    Column(ColumnChart<C>),
    Line(LineChart<L>),
}

impl<C, L> ConfiguredBackend<C, L>
where
    C: ColumnChartLibrary,
    L: LineChartLibrary<Element = C::Element>,
{
    /// Wrap the library matching `kind`; the other one is dropped unused
    pub fn select(kind: BackendKind, column: C, line: L) -> Self {
        match kind {
            BackendKind::Column => ConfiguredBackend::Column(ColumnChart::new(column)),
            BackendKind::Line => ConfiguredBackend::Line(LineChart::new(line)),
        }
    }
}

impl<C, L> ChartBackend for ConfiguredBackend<C, L>
where
    C: ColumnChartLibrary,
    L: LineChartLibrary<Element = C::Element>,
{
    type Element = C::Element;

    fn kind(&self) -> BackendKind {
        match self {
            ConfiguredBackend::Column(chart) => chart.kind(),
            ConfiguredBackend::Line(chart) => chart.kind(),
        }
    }

    fn ready(&self) -> LocalBoxFuture<'_, ChartResult<()>> {
        match self {
            ConfiguredBackend::Column(chart) => chart.ready(),
            ConfiguredBackend::Line(chart) => chart.ready(),
        }
    }

    fn render(
        &self,
        container: &Self::Element,
        data: &GraphData,
        options: &GraphOptions,
    ) -> ChartResult<()> {
        match self {
            ConfiguredBackend::Column(chart) => chart.render(container, data, options),
            ConfiguredBackend::Line(chart) => chart.render(container, data, options),
        }
    }
}
