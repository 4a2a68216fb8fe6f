//! Common error types used across all Trackstats chart crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all chart rendering operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ChartError {
    // DOM errors
    #[error("Chart container not found: {locator}")]
    ContainerNotFound { locator: String },

    // Data-related errors
    #[error("Invalid graph data: {message}")]
    InvalidData { message: String },

    #[error("Invalid row {row}: {message}")]
    RowShape { row: usize, message: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    // Third-party library errors
    #[error("Charting library unavailable: {library}")]
    LibraryUnavailable { library: String },

    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ChartError,
    pub timestamp: u64,
    pub context: Option<ErrorContext>,
}

/// Additional context for error reporting
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: ChartError) -> Self {
        Self {
            success: false,
            error,
            timestamp: chrono::Utc::now().timestamp_millis() as u64,
            context: None,
        }
    }

    /// Add context to the error response
    pub fn with_context(mut self, component: &str, operation: &str) -> Self {
        self.context = Some(ErrorContext {
            component: component.to_string(),
            operation: operation.to_string(),
        });
        self
    }

    /// Convert to JSON string for JavaScript
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"type":"JsInterop","details":{"message":"Failed to serialize error"}}}"#.to_string()
        })
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::InvalidConfig {
            message: err.to_string(),
            field: None,
        }
    }
}

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for ChartError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        let message = err
            .as_string()
            .unwrap_or_else(|| format!("{err:?}"));
        ChartError::JsInterop { message }
    }
}
