//! Common error types used across all dashboard crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all dashboard operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DashboardError {
    // Data-related errors
    #[error("Element not found: #{id}")]
    ElementNotFound { id: String },

    #[error("Data parse error in #{source_id}: {message}")]
    DataParse { source_id: String, message: String },

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Mixed record shapes at index {index}: expected {expected} but got {actual}")]
    MixedShapes {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    // Rendering errors
    #[error("Chart construction failed for #{container_id}: {message}")]
    ChartConstruction {
        container_id: String,
        message: String,
    },

    #[error("Chart instance not found: #{container_id}")]
    ChartNotFound { container_id: String },

    // Platform errors
    #[error("Clipboard write failed: {message}")]
    Clipboard { message: String },

    #[error("Share failed: {message}")]
    Share { message: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    // WASM-specific errors
    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

impl DashboardError {
    /// Wrap a JSON error raised while reading the element `source_id`
    pub fn data_parse(source_id: &str, err: &serde_json::Error) -> Self {
        DashboardError::DataParse {
            source_id: source_id.to_string(),
            message: err.to_string(),
        }
    }

    pub fn chart_construction(container_id: &str, message: impl Into<String>) -> Self {
        DashboardError::ChartConstruction {
            container_id: container_id.to_string(),
            message: message.into(),
        }
    }
}

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: DashboardError,
    pub context: Option<ErrorContext>,
}

/// Additional context for error reporting
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
}

impl ErrorResponse {
    pub fn new(error: DashboardError) -> Self {
        Self {
            success: false,
            error,
            context: None,
        }
    }

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

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for DashboardError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        DashboardError::JsInterop {
            message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        }
    }
}

#[cfg(feature = "wasm")]
impl From<DashboardError> for wasm_bindgen::JsValue {
    fn from(err: DashboardError) -> Self {
        wasm_bindgen::JsValue::from_str(&ErrorResponse::new(err).to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DashboardError::ElementNotFound {
            id: "mainChart".to_string(),
        };

        let response = ErrorResponse::new(error).with_context("Dashboard", "refresh_main_chart");

        let json = response.to_json();
        assert!(json.contains("ElementNotFound"));
        assert!(json.contains("mainChart"));
        assert!(json.contains("refresh_main_chart"));
    }

    #[test]
    fn test_data_parse_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = DashboardError::data_parse("visitOverTime", &err);

        match &error {
            DashboardError::DataParse { source_id, .. } => assert_eq!(source_id, "visitOverTime"),
            _ => panic!("Wrong error variant"),
        }
        assert!(error.to_string().starts_with("Data parse error in #visitOverTime"));
    }
}
