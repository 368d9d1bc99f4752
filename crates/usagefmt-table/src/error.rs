//! Error types for the table crate.

use thiserror::Error;

/// Errors raised while filling a [`TextTable`](crate::TextTable).
///
/// Overlong text is never an error: it is truncated, wrapped or spanned
/// according to the column's [`Overflow`](crate::Overflow) policy. Only
/// mismatches between what a caller writes and the table's fixed shape fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A row was supplied with a different number of values than the table has columns.
    #[error("invalid layout: expected {expected} column values, got {actual}")]
    InvalidLayout { expected: usize, actual: usize },

    /// A table was constructed without any columns.
    #[error("a table needs at least one column")]
    NoColumns,

    /// A column was declared with zero width.
    #[error("column {column} has zero width")]
    ZeroWidthColumn { column: usize },

    /// A direct cell write addressed a row that does not exist yet.
    #[error("row {row} is out of bounds (table has {rows} rows)")]
    RowOutOfBounds { row: usize, rows: usize },

    /// A direct cell write addressed a column that does not exist.
    #[error("column {column} is out of bounds (table has {columns} columns)")]
    ColumnOutOfBounds { column: usize, columns: usize },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
