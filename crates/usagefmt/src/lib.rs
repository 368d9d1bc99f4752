//! # usagefmt - Usage Help Rendering for Command-Line Tools
//!
//! Declare a command's options and positional parameters once as plain
//! descriptors, and get a synopsis plus a column-aligned option table that
//! fits the terminal.
//!
//! ## Pieces
//!
//! - [`OptionDescriptor`], [`ParameterDescriptor`], [`CommandConfig`]: the
//!   data to render, loadable from YAML or JSON through [`CommandSpec`]
//! - [`order`]: comparators for option display order
//! - [`ValueLabelRenderer`]: value placeholders such as `=<file>`
//! - [`OptionRenderer`] / [`ParameterRenderer`]: descriptor to table cells
//! - [`Layout`] with a [`Placement`] strategy: cells into a [`TextTable`]
//! - [`SynopsisBuilder`]: the `Usage:` line, with flag clusters and wrapping
//! - [`Help`]: puts the sections together
//!
//! ## Quick Start
//!
//! ```rust
//! use usagefmt::{CommandConfig, CommandSpec, OptionDescriptor, ParameterDescriptor, Range};
//!
//! let spec = CommandSpec::new(CommandConfig::new("cat").abbreviate_synopsis(true))
//!     .option(OptionDescriptor::switch(["-n", "--number"]).description("number all output lines"))
//!     .option(OptionDescriptor::switch(["--help"]).usage_help(true).description("display this help and exit"))
//!     .parameter(ParameterDescriptor::new("files").value_label("FILE").arity(Range::at_least(0)));
//!
//! let usage = spec.help().usage().unwrap();
//! assert!(usage.starts_with("Usage: cat [OPTIONS] [FILE...]\n"));
//! assert!(usage.contains("  -n, --number                number all output lines\n"));
//! ```
//!
//! Rendering never writes anywhere; the caller decides where the text goes.
//! Enable a `tracing` subscriber to see layout decisions at `debug`/`trace`
//! level.

pub mod config;
pub mod error;
pub mod help;
pub mod label;
pub mod layout;
pub mod model;
pub mod order;
pub mod render;
pub mod synopsis;

pub use usagefmt_table as table;
pub use usagefmt_table::{CellPosition, Column, Overflow, TableError, TextTable};

pub use config::{terminal_width, CommandConfig, CommandSpec, DEFAULT_COMMAND_NAME};
pub use error::{Result, UsageError};
pub use help::{Help, USAGE_PREFIX};
pub use label::{
    DefaultValueLabelRenderer, MinimalValueLabelRenderer, ValueLabelRenderer, DEFAULT_SEPARATOR,
};
pub use layout::{DefaultPlacement, Descriptor, Layout, PackedPlacement, Placement};
pub use model::{OptionDescriptor, ParameterDescriptor, Range};
pub use order::OptionOrder;
pub use render::{
    CellGrid, DefaultOptionRenderer, DefaultParameterRenderer, MinimalOptionRenderer,
    MinimalParameterRenderer, OptionRenderer, ParameterRenderer,
};
pub use synopsis::SynopsisBuilder;
