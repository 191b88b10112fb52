//! Error types for the tabview crate.

use thiserror::Error;

/// Errors reported by the view engine and its configuration.
///
/// None of these leave the engine in an inconsistent state: a rejected
/// request keeps the previous state, and a malformed bound is cleared.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Sort requested on a column that is unknown or not sortable.
    #[error("cannot sort by column '{column}': {reason}")]
    InvalidSortColumn {
        column: String,
        reason: &'static str,
    },

    /// Page size outside the allowed set (only under the reject policy).
    #[error("page size {requested} is not one of {allowed:?}")]
    InvalidPageSize {
        requested: usize,
        allowed: Vec<usize>,
    },

    /// Numeric bound input that is not a finite number.
    #[error("bound for '{field}' is not a number: {input:?}")]
    MalformedNumericBound { field: String, input: String },

    /// Two columns in one specification share an id.
    #[error("duplicate column id '{0}'")]
    DuplicateColumn(String),

    /// Configuration values that cannot be used.
    #[error("invalid view configuration: {0}")]
    InvalidConfig(String),

    /// YAML configuration could not be parsed.
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON configuration could not be parsed.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;
