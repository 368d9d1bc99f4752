//! # usagefmt-table - Fixed-Width Text Tables for Help Output
//!
//! A small layout engine for column-aligned terminal text. A [`TextTable`] has
//! a fixed list of [`Column`]s, each with a width, an indent and an
//! [`Overflow`] policy:
//!
//! | Overflow | Text wider than the column... |
//! |----------|-------------------------------|
//! | [`Overflow::Truncate`] | is cut at the column edge |
//! | [`Overflow::Wrap`] | breaks at words onto continuation rows in the same column |
//! | [`Overflow::Span`] | runs on into the following columns, then onto a new row |
//!
//! One logical row can therefore expand into several physical rows. Each
//! physical row renders as one line.
//!
//! ## Quick Start
//!
//! ```rust
//! use usagefmt_table::{Column, TextTable};
//!
//! let mut table = TextTable::new(vec![Column::truncate(15, 2), Column::wrap(30, 1)])
//!     .unwrap()
//!     .indent_wrapped_lines(0);
//! table.add_row_values(&["-a", "Displays all connections and listening ports."]).unwrap();
//!
//! assert_eq!(
//!     table.to_text(),
//!     "  -a            Displays all connections and\n                listening ports.\n"
//! );
//! ```
//!
//! Rows must always carry exactly one value per column; anything else is a
//! [`TableError::InvalidLayout`].

mod error;
mod table;
mod types;
mod util;

pub use error::{Result, TableError};
pub use table::{TextTable, DEFAULT_USAGE_WIDTH, DEFAULT_WRAPPED_INDENT};
pub use types::{CellPosition, Column, Overflow};
pub use util::{
    display_width, fit_within, line_segments, prefix_within, words_within, wrap, LINE_SEPARATOR,
};
