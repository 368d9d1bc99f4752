//! Error types for usage rendering.

use thiserror::Error;
use usagefmt_table::TableError;

/// Errors that can occur when loading descriptors or rendering usage text.
#[derive(Debug, Error)]
pub enum UsageError {
    /// A renderer and table disagree on the row shape, or a layout wrote outside the table.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A descriptor violates its invariants, such as having no names.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// A range is inverted (`min > max`) or its text such as `"1..*"` could not be parsed.
    #[error("invalid range '{0}': expected forms like '1', '0..1', '1..*' or '4..'")]
    InvalidRange(String),

    /// YAML command spec could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON command spec could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command spec file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for usage rendering operations.
pub type Result<T> = std::result::Result<T, UsageError>;
