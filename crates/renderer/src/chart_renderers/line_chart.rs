//! Line chart backend: hands the graph data to the library untouched

use futures::future::{self, LocalBoxFuture};
use trackstats_shared::{BackendKind, ChartError, ChartResult, GraphData, GraphOptions};

use super::ChartBackend;

/// A line charting library that is already present on the page
pub trait LineChartLibrary {
    type Element;

    /// Library name used in logs and errors
    fn name(&self) -> &str;

    /// Whether the library is loaded
    fn is_available(&self) -> bool;

    /// Construct a line chart bound to `container`
    fn construct(
        &self,
        container: &Self::Element,
        data: &GraphData,
        options: &GraphOptions,
    ) -> ChartResult<()>;
}

/// Line chart backend
pub struct LineChart<L> {
    library: L,
}

impl<L: LineChartLibrary> LineChart<L> {
    pub fn new(library: L) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &L {
        &self.library
    }
}

impl<L: LineChartLibrary> ChartBackend for LineChart<L> {
    type Element = L::Element;

    fn kind(&self) -> BackendKind {
        BackendKind::Line
    }

    // No load step. Availability is checked only once a container was found,
    // so a page without one never touches the library.
    fn ready(&self) -> LocalBoxFuture<'_, ChartResult<()>> {
        Box::pin(future::ready(Ok(())))
    }

    fn render(
        &self,
        container: &Self::Element,
        data: &GraphData,
        options: &GraphOptions,
    ) -> ChartResult<()> {
        if !self.library.is_available() {
            return Err(ChartError::LibraryUnavailable {
                library: self.library.name().to_string(),
            });
        }
        self.library.construct(container, data, options)
    }
}
