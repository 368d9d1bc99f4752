//! The fixed-column text table.
//!
//! A [`TextTable`] owns a fixed set of [`Column`]s and an append-only list of
//! physical rows. Writing one logical row may produce several physical rows:
//! a [`Overflow::Wrap`] cell continues below itself, and an
//! [`Overflow::Span`] cell runs on into the columns to its right and then onto
//! a new row. Each physical row becomes exactly one line of [`TextTable::to_text`].
//!
//! # Example
//!
//! ```rust
//! use usagefmt_table::TextTable;
//!
//! let mut table = TextTable::new_default();
//! table.add_row_values(&["", "-v", ",", "--verbose", "be chatty"]).unwrap();
//! assert_eq!(
//!     table.to_text(),
//!     "  -v, --verbose               be chatty\n"
//! );
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, TableError};
use crate::types::{CellPosition, Column, Overflow};
use crate::util::{display_width, fit_within, prefix_within, LINE_SEPARATOR};

/// Default line-width budget, in display columns.
pub const DEFAULT_USAGE_WIDTH: usize = 80;

/// Default extra indent for continuation lines of wrapped and spanned cells.
pub const DEFAULT_WRAPPED_INDENT: usize = 2;

/// Combined width of the four columns that precede the description column
/// in the default layout.
const DEFAULT_LEADING_WIDTH: usize = 29;

/// One fixed-width slot of a physical row.
#[derive(Clone, Debug, Default)]
struct Slot {
    text: String,
    width: usize,
}

impl Slot {
    /// Writes `text` starting at display offset `offset`, blank-filling any gap.
    fn write(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        if offset < self.width {
            let keep = prefix_within(&self.text, offset).len();
            self.text.truncate(keep);
            self.width = display_width(&self.text);
        }
        if self.width < offset {
            self.text.push_str(&" ".repeat(offset - self.width));
            self.width = offset;
        }
        self.text.push_str(text);
        self.width += display_width(text);
    }
}

/// A table with fixed columns that lays out help text.
#[derive(Clone, Debug)]
pub struct TextTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Slot>>,
    indent_wrapped_lines: usize,
}

impl TextTable {
    /// Create a table with the given columns.
    ///
    /// # Errors
    ///
    /// Fails when `columns` is empty or any column has zero width.
    pub fn new(columns: impl Into<Vec<Column>>) -> Result<Self> {
        let columns = columns.into();
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        if let Some(column) = columns.iter().position(|c| c.width == 0) {
            return Err(TableError::ZeroWidthColumn { column });
        }
        Ok(TextTable {
            columns,
            rows: Vec::new(),
            indent_wrapped_lines: DEFAULT_WRAPPED_INDENT,
        })
    }

    /// Create the standard five-column option table for an 80-column budget.
    pub fn new_default() -> Self {
        Self::with_usage_width(DEFAULT_USAGE_WIDTH)
    }

    /// Create the standard five-column option table for the given line width.
    pub fn with_usage_width(usage_width: usize) -> Self {
        TextTable {
            columns: Self::default_columns(usage_width),
            rows: Vec::new(),
            indent_wrapped_lines: DEFAULT_WRAPPED_INDENT,
        }
    }

    /// The standard five-column shape: required marker, short name, comma,
    /// long names with value label, description.
    ///
    /// The description column takes whatever is left of `usage_width`, with
    /// a floor of 2 so that it can always hold one character after its indent.
    pub fn default_columns(usage_width: usize) -> Vec<Column> {
        let description = usage_width.saturating_sub(DEFAULT_LEADING_WIDTH).max(2);
        vec![
            Column::truncate(2, 0),
            Column::truncate(2, 0),
            Column::truncate(1, 0),
            Column::span(24, 1),
            Column::wrap(description, 1),
        ]
    }

    /// Set the extra indent applied to continuation lines (default 2).
    pub fn indent_wrapped_lines(mut self, indent: usize) -> Self {
        self.indent_wrapped_lines = indent;
        self
    }

    /// The table's columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of physical rows emitted so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Text written into a cell, or `None` if the cell does not exist.
    ///
    /// Cell text includes the column indent but not the padding to the column width.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(|slot| slot.text.as_str())
    }

    /// Append a row of blank cells.
    pub fn add_empty_row(&mut self) {
        self.rows.push(vec![Slot::default(); self.columns.len()]);
    }

    /// Lay out one logical row, one value per column.
    ///
    /// Values are written left to right. When a value spans or wraps onto
    /// further rows, the values after it continue on a fresh row below the
    /// expansion, in their own columns.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidLayout`] when the number of values differs
    /// from the number of columns. The table is left untouched in that case.
    pub fn add_row_values<S: AsRef<str>>(&mut self, values: &[S]) -> Result<()> {
        if values.len() != self.columns.len() {
            debug!(
                expected = self.columns.len(),
                actual = values.len(),
                "rejecting row with wrong number of values"
            );
            return Err(TableError::InvalidLayout {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        self.add_empty_row();
        let last = values.len() - 1;
        for (column, value) in values.iter().enumerate() {
            let row = self.rows.len() - 1;
            let end = self.put_value(row, column, value.as_ref())?;
            if end != CellPosition::new(row, column) && column != last {
                self.add_empty_row();
            }
        }
        Ok(())
    }

    /// Write `value` into one cell, applying the column's overflow policy.
    ///
    /// Returns the position of the last cell written to. It differs from
    /// `(row, column)` when the value spanned into other columns or wrapped
    /// onto other rows. Rows needed for the overflow are appended as required.
    ///
    /// # Errors
    ///
    /// Fails when `row` or `column` lies outside the table.
    pub fn put_value(&mut self, row: usize, column: usize, value: &str) -> Result<CellPosition> {
        if row >= self.rows.len() {
            return Err(TableError::RowOutOfBounds {
                row,
                rows: self.rows.len(),
            });
        }
        if column >= self.columns.len() {
            return Err(TableError::ColumnOutOfBounds {
                column,
                columns: self.columns.len(),
            });
        }
        if value.is_empty() {
            return Ok(CellPosition::new(row, column));
        }

        let spec = self.columns[column];
        match spec.overflow {
            Overflow::Truncate => {
                let fitted = prefix_within(value, spec.room_after(spec.indent));
                self.rows[row][column].write(spec.indent, fitted);
                Ok(CellPosition::new(row, column))
            }
            Overflow::Wrap => Ok(self.put_wrapped(row, column, value)),
            Overflow::Span => Ok(self.put_spanned(row, column, value)),
        }
    }

    fn put_wrapped(&mut self, mut row: usize, column: usize, value: &str) -> CellPosition {
        let spec = self.columns[column];
        let mut offset = spec.writable_offset(spec.indent);
        let mut rest = value;
        loop {
            let line = fit_within(rest, spec.room_after(offset));
            self.rows[row][column].write(offset, line);
            rest = rest[line.len()..].trim_start();
            if rest.is_empty() {
                break;
            }
            offset = spec.writable_offset(spec.indent + self.indent_wrapped_lines);
            row += 1;
            self.ensure_row(row);
        }
        CellPosition::new(row, column)
    }

    fn put_spanned(&mut self, mut row: usize, start: usize, value: &str) -> CellPosition {
        let spec = self.columns[start];
        let last = self.columns.len() - 1;
        let mut column = start;
        let mut offset = spec.writable_offset(spec.indent);
        let mut rest = value;
        loop {
            let room = self.columns[column].room_after(offset);
            let chunk = if column == last {
                fit_within(rest, room)
            } else {
                prefix_within(rest, room)
            };
            if !chunk.is_empty() {
                self.rows[row][column].write(offset, chunk);
                rest = &rest[chunk.len()..];
            }
            if rest.is_empty() {
                break;
            }
            offset = 0;
            column += 1;
            if column > last {
                rest = rest.trim_start();
                if rest.is_empty() {
                    column = last;
                    break;
                }
                row += 1;
                self.ensure_row(row);
                trace!(row, "spanned cell continues on a new row");
                column = start;
                offset = spec.writable_offset(spec.indent + self.indent_wrapped_lines);
            }
        }
        CellPosition::new(row, column)
    }

    fn ensure_row(&mut self, row: usize) {
        while self.rows.len() <= row {
            self.add_empty_row();
        }
    }

    /// Render all rows, one line per physical row.
    ///
    /// Every cell is padded to its column width, trailing blanks are trimmed
    /// from each line, and each line ends with the platform line separator.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for row in &self.rows {
            let mut line = String::new();
            for (slot, column) in row.iter().zip(&self.columns) {
                line.push_str(&slot.text);
                line.push_str(&" ".repeat(column.width.saturating_sub(slot.width)));
            }
            text.push_str(line.trim_end_matches(' '));
            text.push_str(LINE_SEPARATOR);
        }
        text
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
