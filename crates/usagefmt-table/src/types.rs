//! Core types for table layout configuration.
//!
//! A table is a fixed sequence of [`Column`]s. Each column has a width, a
//! left indent, and an [`Overflow`] policy deciding what happens to text that
//! does not fit.

use serde::{Deserialize, Serialize};

/// How a column handles content that exceeds its width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Cut the text at the column width, without any marker.
    #[default]
    Truncate,
    /// Break the text at word boundaries onto continuation rows in the same column.
    Wrap,
    /// Let the text run on into the following columns of the same row.
    ///
    /// When every column to the right is used up, the remainder continues on
    /// a new row, starting again at the spanning column.
    Span,
}

/// Configuration for a single column in a table.
///
/// Columns deserialize from `{ width, indent, overflow }` maps, with `indent`
/// defaulting to 0 and `overflow` to `truncate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Total width of the column in display columns, indent included.
    pub width: usize,
    /// Blank columns written before the cell text.
    #[serde(default)]
    pub indent: usize,
    /// What to do with text wider than `width - indent`.
    #[serde(default)]
    pub overflow: Overflow,
}

impl Column {
    /// Create a column with explicit width, indent and overflow policy.
    pub const fn new(width: usize, indent: usize, overflow: Overflow) -> Self {
        Column {
            width,
            indent,
            overflow,
        }
    }

    /// Create a truncating column.
    pub const fn truncate(width: usize, indent: usize) -> Self {
        Column::new(width, indent, Overflow::Truncate)
    }

    /// Create a word-wrapping column.
    pub const fn wrap(width: usize, indent: usize) -> Self {
        Column::new(width, indent, Overflow::Wrap)
    }

    /// Create a column whose overlong text spans into the following columns.
    pub const fn span(width: usize, indent: usize) -> Self {
        Column::new(width, indent, Overflow::Span)
    }

    /// Offset moved left as needed so at least one column of room remains.
    pub(crate) fn writable_offset(&self, offset: usize) -> usize {
        offset.min(self.width.saturating_sub(1))
    }

    /// Width left for text after the given offset.
    pub(crate) fn room_after(&self, offset: usize) -> usize {
        self.width.saturating_sub(offset)
    }
}

/// Location of a table cell, returned by writes to report where they ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    /// Zero-based physical row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

impl CellPosition {
    pub const fn new(row: usize, column: usize) -> Self {
        CellPosition { row, column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_default_is_truncate() {
        assert_eq!(Overflow::default(), Overflow::Truncate);
    }

    #[test]
    fn column_shorthands() {
        assert_eq!(Column::span(24, 1).overflow, Overflow::Span);
        assert_eq!(Column::wrap(51, 1).overflow, Overflow::Wrap);
        assert_eq!(Column::truncate(2, 0), Column::new(2, 0, Overflow::Truncate));
    }

    #[test]
    fn column_room_after_saturates() {
        let col = Column::truncate(5, 2);
        assert_eq!(col.room_after(2), 3);
        assert_eq!(col.room_after(9), 0);
    }

    #[test]
    fn column_deserialize_with_defaults() {
        let col: Column = serde_json::from_str(r#"{"width": 10}"#).unwrap();
        assert_eq!(col, Column::truncate(10, 0));

        let col: Column =
            serde_json::from_str(r#"{"width": 39, "indent": 2, "overflow": "wrap"}"#).unwrap();
        assert_eq!(col, Column::wrap(39, 2));
    }

    #[test]
    fn overflow_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Overflow::Span).unwrap(), r#""span""#);
        let parsed: Overflow = serde_json::from_str(r#""wrap""#).unwrap();
        assert_eq!(parsed, Overflow::Wrap);
    }
}
