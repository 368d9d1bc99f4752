//! Cell renderers: turn one descriptor into rows of table cells.
//!
//! A renderer's grid must match the table it is laid out into: one value per
//! column in every row. The default renderers target the five-column
//! [`TextTable::default_columns`](usagefmt_table::TextTable::default_columns)
//! shape, the minimal renderers a two-value group.

use crate::config::CommandConfig;
use crate::label::ValueLabelRenderer;
use crate::model::{OptionDescriptor, ParameterDescriptor};

/// Rows of cell text, one value per column.
pub type CellGrid = Vec<Vec<String>>;

/// Renders an option into cells.
pub trait OptionRenderer {
    fn render(&self, option: &OptionDescriptor, labels: &dyn ValueLabelRenderer) -> CellGrid;
}

/// Renders a positional parameter into cells.
pub trait ParameterRenderer {
    fn render(&self, parameter: &ParameterDescriptor, labels: &dyn ValueLabelRenderer)
        -> CellGrid;
}

/// Five cells with only the description column filled.
fn description_row(text: &str) -> Vec<String> {
    vec![
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        text.to_string(),
    ]
}

/// One row per description line after the first.
fn continuation_rows(description: &[String]) -> impl Iterator<Item = Vec<String>> + '_ {
    description.iter().skip(1).map(|line| description_row(line))
}

/// `{ primary name + label, first description line }`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimalOptionRenderer;

impl OptionRenderer for MinimalOptionRenderer {
    fn render(&self, option: &OptionDescriptor, labels: &dyn ValueLabelRenderer) -> CellGrid {
        vec![vec![
            format!("{}{}", option.primary_name(), labels.render_option(option)),
            option.first_description().to_string(),
        ]]
    }
}

/// `{ label, first description line }`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimalParameterRenderer;

impl ParameterRenderer for MinimalParameterRenderer {
    fn render(
        &self,
        parameter: &ParameterDescriptor,
        labels: &dyn ValueLabelRenderer,
    ) -> CellGrid {
        vec![vec![
            labels.render_parameter(parameter),
            parameter.first_description().to_string(),
        ]]
    }
}

/// Five-column option rows: marker, short name, comma, other names with
/// the value label, description.
///
/// Further description lines get rows of their own, followed by a
/// `Default: <value>` row when default values are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultOptionRenderer {
    pub required_marker: char,
    pub show_default_values: bool,
}

impl Default for DefaultOptionRenderer {
    fn default() -> Self {
        DefaultOptionRenderer {
            required_marker: ' ',
            show_default_values: true,
        }
    }
}

impl DefaultOptionRenderer {
    pub fn from_config(config: &CommandConfig) -> Self {
        DefaultOptionRenderer {
            required_marker: config.required_option_marker,
            show_default_values: config.show_default_values,
        }
    }
}

impl OptionRenderer for DefaultOptionRenderer {
    fn render(&self, option: &OptionDescriptor, labels: &dyn ValueLabelRenderer) -> CellGrid {
        let names = option.names_shortest_first();
        let has_short = names.first().is_some_and(|n| n.chars().count() == 2);
        let (short, rest) = if has_short {
            (names[0], &names[1..])
        } else {
            ("", &names[..])
        };
        let comma = if has_short && !rest.is_empty() { "," } else { "" };
        let marker = if option.required {
            self.required_marker.to_string()
        } else {
            String::new()
        };

        let long = format!("{}{}", rest.join(", "), labels.render_option(option));

        let mut grid = vec![vec![
            marker,
            short.to_string(),
            comma.to_string(),
            long,
            option.first_description().to_string(),
        ]];
        grid.extend(continuation_rows(&option.description));
        if self.show_default_values && !option.is_flag() {
            if let Some(default) = &option.default_value {
                grid.push(description_row(&format!("Default: {}", default)));
            }
        }
        grid
    }
}

/// Five-column parameter rows: marker, two blanks, label, description.
///
/// The marker shows only for parameters that need at least one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultParameterRenderer {
    pub required_marker: char,
}

impl Default for DefaultParameterRenderer {
    fn default() -> Self {
        DefaultParameterRenderer {
            required_marker: ' ',
        }
    }
}

impl DefaultParameterRenderer {
    pub fn from_config(config: &CommandConfig) -> Self {
        DefaultParameterRenderer {
            required_marker: config.required_option_marker,
        }
    }
}

impl ParameterRenderer for DefaultParameterRenderer {
    fn render(
        &self,
        parameter: &ParameterDescriptor,
        labels: &dyn ValueLabelRenderer,
    ) -> CellGrid {
        let marker = if parameter.arity.min() > 0 {
            self.required_marker.to_string()
        } else {
            String::new()
        };
        let mut grid = vec![vec![
            marker,
            String::new(),
            String::new(),
            labels.render_parameter(parameter),
            parameter.first_description().to_string(),
        ]];
        grid.extend(continuation_rows(&parameter.description));
        grid
    }
}
