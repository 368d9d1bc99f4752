//! Layout: drives renderers into a [`TextTable`].
//!
//! A [`Layout`] renders each visible descriptor into a [`CellGrid`] and hands
//! the grid to its [`Placement`], which decides where the cells land. The
//! [`DefaultPlacement`] appends every grid row as a table row. Custom
//! placements write cells directly with [`TextTable::put_value`]; the
//! [`PackedPlacement`] puts two options side by side on each line.
//!
//! ```rust
//! use usagefmt::{DefaultValueLabelRenderer, Layout, OptionDescriptor};
//!
//! let options = vec![
//!     OptionDescriptor::switch(["-v", "--verbose"]).description("be chatty"),
//!     OptionDescriptor::switch(["--secret"]).hidden(true),
//! ];
//! let mut layout = Layout::default();
//! layout.add_options(&options, &DefaultValueLabelRenderer::default()).unwrap();
//! assert_eq!(layout.to_text(), "  -v, --verbose               be chatty\n");
//! ```

use std::fmt;

use tracing::trace;
use usagefmt_table::{CellPosition, TextTable};

use crate::config::CommandConfig;
use crate::error::Result;
use crate::label::ValueLabelRenderer;
use crate::model::{OptionDescriptor, ParameterDescriptor};
use crate::render::{
    CellGrid, DefaultOptionRenderer, DefaultParameterRenderer, OptionRenderer, ParameterRenderer,
};

/// The descriptor a grid was rendered from.
#[derive(Clone, Copy, Debug)]
pub enum Descriptor<'a> {
    Option(&'a OptionDescriptor),
    Parameter(&'a ParameterDescriptor),
}

/// Decides where a rendered grid goes in the table.
pub trait Placement {
    /// Write `grid` into `table`.
    ///
    /// # Errors
    ///
    /// Propagates table errors such as a row whose length does not match
    /// the column count.
    fn place(&mut self, table: &mut TextTable, descriptor: Descriptor<'_>, grid: &CellGrid)
        -> Result<()>;
}

/// Appends each grid row as a new table row.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPlacement;

impl Placement for DefaultPlacement {
    fn place(&mut self, table: &mut TextTable, _: Descriptor<'_>, grid: &CellGrid) -> Result<()> {
        for row in grid {
            table.add_row_values(row)?;
        }
        Ok(())
    }
}

/// Places consecutive single-row grids next to each other.
///
/// Only the first row of each grid is used. A grid continues the current
/// table row when the columns after the last written cell can hold all of
/// its values; otherwise it starts a new row at column 0. When the last
/// write spilled onto extra rows, the new grid starts on the last of them.
#[derive(Clone, Copy, Debug, Default)]
pub struct PackedPlacement {
    previous: Option<CellPosition>,
}

impl Placement for PackedPlacement {
    fn place(&mut self, table: &mut TextTable, _: Descriptor<'_>, grid: &CellGrid) -> Result<()> {
        let Some(values) = grid.first() else {
            return Ok(());
        };
        let mut column = self.previous.map_or(0, |p| p.column + 1);
        let fits = self.previous.is_some() && column + values.len() <= table.column_count();
        if !fits {
            let spilled = self
                .previous
                .is_some_and(|p| table.row_count() != p.row + 1);
            if table.row_count() == 0 || !spilled {
                table.add_empty_row();
            }
            column = 0;
        }
        for (offset, value) in values.iter().enumerate() {
            let row = table.row_count() - 1;
            self.previous = Some(table.put_value(row, column + offset, value)?);
        }
        Ok(())
    }
}

/// Renders descriptors into a table through a placement strategy.
pub struct Layout {
    table: TextTable,
    option_renderer: Box<dyn OptionRenderer>,
    parameter_renderer: Box<dyn ParameterRenderer>,
    placement: Box<dyn Placement>,
}

impl Layout {
    pub fn new(
        table: TextTable,
        option_renderer: impl OptionRenderer + 'static,
        parameter_renderer: impl ParameterRenderer + 'static,
    ) -> Self {
        Layout {
            table,
            option_renderer: Box::new(option_renderer),
            parameter_renderer: Box::new(parameter_renderer),
            placement: Box::new(DefaultPlacement),
        }
    }

    /// The default five-column table and renderers, configured from `config`.
    pub fn for_command(config: &CommandConfig) -> Self {
        Self::new(
            TextTable::with_usage_width(config.usage_width),
            DefaultOptionRenderer::from_config(config),
            DefaultParameterRenderer::from_config(config),
        )
    }

    /// Replace the placement strategy.
    pub fn with_placement(mut self, placement: impl Placement + 'static) -> Self {
        self.placement = Box::new(placement);
        self
    }

    /// Place one rendered grid.
    ///
    /// # Errors
    ///
    /// Fails when the grid does not fit the table's columns.
    pub fn layout(&mut self, descriptor: Descriptor<'_>, grid: &CellGrid) -> Result<()> {
        self.placement.place(&mut self.table, descriptor, grid)
    }

    /// Render and place every option that is not hidden, in the given order.
    ///
    /// # Errors
    ///
    /// Stops at the first grid that does not fit the table.
    pub fn add_options<'a, I>(&mut self, options: I, labels: &dyn ValueLabelRenderer) -> Result<()>
    where
        I: IntoIterator<Item = &'a OptionDescriptor>,
    {
        for option in options.into_iter().filter(|o| !o.hidden) {
            trace!(option = option.primary_name(), "laying out option");
            let grid = self.option_renderer.render(option, labels);
            self.layout(Descriptor::Option(option), &grid)?;
        }
        Ok(())
    }

    /// Render and place every positional parameter that is not hidden.
    ///
    /// # Errors
    ///
    /// Stops at the first grid that does not fit the table.
    pub fn add_positional_parameters<'a, I>(
        &mut self,
        parameters: I,
        labels: &dyn ValueLabelRenderer,
    ) -> Result<()>
    where
        I: IntoIterator<Item = &'a ParameterDescriptor>,
    {
        for parameter in parameters.into_iter().filter(|p| !p.hidden) {
            trace!(parameter = %parameter.fallback_label, "laying out parameter");
            let grid = self.parameter_renderer.render(parameter, labels);
            self.layout(Descriptor::Parameter(parameter), &grid)?;
        }
        Ok(())
    }

    pub fn table(&self) -> &TextTable {
        &self.table
    }

    pub fn into_table(self) -> TextTable {
        self.table
    }

    pub fn to_text(&self) -> String {
        self.table.to_text()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_command(&CommandConfig::default())
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
