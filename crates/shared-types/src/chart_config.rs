//! Chart configuration supplied by the page at startup

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data_types::{GraphData, GraphOptions};
use crate::errors::{ChartError, ChartResult};

/// Element id the column chart renders into by default
pub const DEFAULT_COLUMN_CONTAINER_ID: &str = "trackstats-graph";

/// Selector the line chart renders into by default
pub const DEFAULT_LINE_CONTAINER_SELECTOR: &str = ".ct-chart";

/// Charting backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Column chart drawn from a `Date|Value` data table
    Column,
    /// Line chart fed the raw graph data
    Line,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Column => "column",
            BackendKind::Line => "line",
        }
    }

    pub fn default_container(&self) -> ContainerLocator {
        match self {
            BackendKind::Column => ContainerLocator::Id(DEFAULT_COLUMN_CONTAINER_ID.to_string()),
            BackendKind::Line => {
                ContainerLocator::Selector(DEFAULT_LINE_CONTAINER_SELECTOR.to_string())
            }
        }
    }

    /// Column charts treat a missing container as a configuration error,
    /// line charts quietly skip rendering.
    pub fn default_missing_container_policy(&self) -> MissingContainerPolicy {
        match self {
            BackendKind::Column => MissingContainerPolicy::Error,
            BackendKind::Line => MissingContainerPolicy::Skip,
        }
    }
}

impl FromStr for BackendKind {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "column" => Ok(BackendKind::Column),
            "line" => Ok(BackendKind::Line),
            other => Err(ChartError::InvalidConfig {
                message: format!("unknown backend '{other}', expected 'column' or 'line'"),
                field: Some("backend".to_string()),
            }),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the chart container is found in the document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerLocator {
    Id(String),
    Selector(String),
}

impl ContainerLocator {
    fn raw(&self) -> &str {
        match self {
            ContainerLocator::Id(id) => id,
            ContainerLocator::Selector(selector) => selector,
        }
    }
}

impl fmt::Display for ContainerLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerLocator::Id(id) => write!(f, "#{id}"),
            ContainerLocator::Selector(selector) => f.write_str(selector),
        }
    }
}

/// What to do when the container is not in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingContainerPolicy {
    Skip,
    Error,
}

/// Everything needed to render one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub backend: BackendKind,
    #[serde(default)]
    pub data: GraphData,
    #[serde(default)]
    pub options: GraphOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerLocator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_container: Option<MissingContainerPolicy>,
}

impl ChartConfig {
    pub fn new(backend: BackendKind, data: GraphData, options: GraphOptions) -> Self {
        Self {
            backend,
            data,
            options,
            container: None,
            missing_container: None,
        }
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_container(mut self, container: ContainerLocator) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_missing_container(mut self, policy: MissingContainerPolicy) -> Self {
        self.missing_container = Some(policy);
        self
    }

    /// Configured container, falling back to the backend default
    pub fn container(&self) -> ContainerLocator {
        self.container
            .clone()
            .unwrap_or_else(|| self.backend.default_container())
    }

    pub fn missing_container_policy(&self) -> MissingContainerPolicy {
        self.missing_container
            .unwrap_or_else(|| self.backend.default_missing_container_policy())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(container) = &self.container {
            if container.raw().trim().is_empty() {
                return Err(ChartError::InvalidConfig {
                    message: "container locator cannot be empty".to_string(),
                    field: Some("container".to_string()),
                });
            }
        }

        if self.backend == BackendKind::Column && !self.data.as_value().is_array() {
            return Err(ChartError::InvalidConfig {
                message: "column charts need an array of [date, value] rows".to_string(),
                field: Some("data".to_string()),
            });
        }

        Ok(())
    }
}
