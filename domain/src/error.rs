//! Errors raised at the dashboard boundaries.
//!
//! Missing or malformed financial figures are never errors; they normalize
//! to absent values. Only decoding the inputs, validating configuration and
//! parsing control values can fail.

use shared::ParseValueError;

/// Failure while loading inputs or interpreting a UI control value
#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    /// The company dataset is not a JSON array of company records
    #[error("Invalid dataset: {0}")]
    Dataset(#[source] serde_json::Error),
    /// The configuration document could not be decoded
    #[error("Invalid configuration document: {0}")]
    Config(#[source] serde_json::Error),
    /// The configuration decoded but breaks a constraint
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// A control value (select option, tab key, header key) was not recognised
    #[error(transparent)]
    Parse(#[from] ParseValueError),
}

/// Failure reported by a chart backend
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Chart backend error: {0}")]
    Backend(String),
}
