//! One-shot chart rendering: wait for the page, find the container, draw

use std::future::Future;

use trackstats_shared::{
    ChartConfig, ChartError, ChartResult, MissingContainerPolicy, RenderOutcome,
};

use crate::chart_renderers::ChartBackend;
use crate::container::ContainerHost;

/// Renders a single chart with one backend into one container
pub struct ChartRenderer<H, B> {
    host: H,
    backend: B,
}

impl<H, B> ChartRenderer<H, B>
where
    H: ContainerHost,
    B: ChartBackend<Element = H::Element>,
{
    pub fn new(host: H, backend: B) -> Self {
        Self { host, backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Render once `dom_ready` resolves and the backend library is loaded.
    ///
    /// A missing container either skips rendering or fails with
    /// [`ChartError::ContainerNotFound`], depending on the configured policy.
    pub async fn render<F>(
        &self,
        dom_ready: F,
        config: &ChartConfig,
    ) -> ChartResult<RenderOutcome>
    where
        F: Future<Output = ()>,
    {
        config.validate()?;

        let kind = self.backend.kind();
        if config.backend != kind {
            return Err(ChartError::InvalidConfig {
                message: format!(
                    "configured for a {} chart but the active backend is {kind}",
                    config.backend
                ),
                field: Some("backend".to_string()),
            });
        }

        dom_ready.await;
        log::debug!("DOM ready, waiting for {kind} chart library");

        self.backend.ready().await?;

        let locator = config.container();
        let Some(container) = self.host.find(&locator) else {
            return match config.missing_container_policy() {
                MissingContainerPolicy::Skip => {
                    log::warn!("No chart container {locator} on the page, skipping {kind} chart");
                    Ok(RenderOutcome::Skipped)
                }
                MissingContainerPolicy::Error => Err(ChartError::ContainerNotFound {
                    locator: locator.to_string(),
                }),
            };
        };

        self.backend.render(&container, &config.data, &config.options)?;

        log::info!("Rendered {kind} chart into {locator}");
        Ok(RenderOutcome::Rendered)
    }
}
