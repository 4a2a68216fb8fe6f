//! Column chart backend: draws a `Date|Value` data table

use futures::future::LocalBoxFuture;
use trackstats_shared::{BackendKind, ChartResult, DataTable, GraphData, GraphOptions};

use super::ChartBackend;

/// A visualization library able to draw column charts from a data table.
///
/// The library is loaded asynchronously; nothing may be drawn before `load`
/// has resolved.
pub trait ColumnChartLibrary {
    type Element;

    /// Library name used in logs and errors
    fn name(&self) -> &str;

    /// Load the library and its column chart package
    fn load(&self) -> LocalBoxFuture<'_, ChartResult<()>>;

    /// Draw a column chart of `table` into `container`
    fn draw(
        &self,
        container: &Self::Element,
        table: &DataTable,
        options: &GraphOptions,
    ) -> ChartResult<()>;
}

/// Column chart backend
pub struct ColumnChart<L> {
    library: L,
}

impl<L: ColumnChartLibrary> ColumnChart<L> {
    pub fn new(library: L) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &L {
        &self.library
    }
}

impl<L: ColumnChartLibrary> ChartBackend for ColumnChart<L> {
    type Element = L::Element;

    fn kind(&self) -> BackendKind {
        BackendKind::Column
    }

    fn ready(&self) -> LocalBoxFuture<'_, ChartResult<()>> {
        log::debug!("[ColumnChart] Loading {}", self.library.name());
        self.library.load()
    }

    fn render(
        &self,
        container: &Self::Element,
        data: &GraphData,
        options: &GraphOptions,
    ) -> ChartResult<()> {
        let table = DataTable::date_value(data)?;
        log::debug!("[ColumnChart] Drawing {} rows", table.row_count());
        self.library.draw(container, &table, options)
    }
}
