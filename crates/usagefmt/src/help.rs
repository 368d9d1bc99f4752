//! Help facade: assembles the sections of one command's usage text.
//!
//! ```rust
//! use usagefmt::{CommandConfig, Help, OptionDescriptor};
//!
//! let config = CommandConfig::default();
//! let options = vec![OptionDescriptor::new(["-f", "--file"])
//!     .required(true)
//!     .description("the file to use")
//!     .default_value("theDefault.txt")];
//!
//! let usage = Help::new(&config, &options, &[]).usage().unwrap();
//! assert_eq!(
//!     usage,
//!     "Usage: <main class> -f=<file>\n\
//!      \x20 -f, --file=<file>           the file to use\n\
//!      \x20                             Default: theDefault.txt\n"
//! );
//! ```

use usagefmt_table::LINE_SEPARATOR;

use crate::config::CommandConfig;
use crate::error::Result;
use crate::label::{DefaultValueLabelRenderer, MinimalValueLabelRenderer, ValueLabelRenderer};
use crate::layout::Layout;
use crate::model::{OptionDescriptor, ParameterDescriptor};
use crate::order::OptionOrder;
use crate::synopsis::SynopsisBuilder;

/// Prefix put in front of the synopsis by [`Help::usage`].
pub const USAGE_PREFIX: &str = "Usage: ";

/// Usage text for one command.
#[derive(Clone, Copy, Debug)]
pub struct Help<'a> {
    config: &'a CommandConfig,
    options: &'a [OptionDescriptor],
    parameters: &'a [ParameterDescriptor],
}

fn section(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("{}{}", line, LINE_SEPARATOR))
        .collect()
}

impl<'a> Help<'a> {
    pub fn new(
        config: &'a CommandConfig,
        options: &'a [OptionDescriptor],
        parameters: &'a [ParameterDescriptor],
    ) -> Self {
        Help {
            config,
            options,
            parameters,
        }
    }

    pub fn config(&self) -> &CommandConfig {
        self.config
    }

    /// Header lines, each followed by a line break.
    pub fn header(&self) -> String {
        section(&self.config.header)
    }

    /// Description lines, each followed by a line break.
    pub fn description(&self) -> String {
        section(&self.config.description)
    }

    /// Footer lines, each followed by a line break.
    pub fn footer(&self) -> String {
        section(&self.config.footer)
    }

    /// The configured synopsis: custom, abbreviated, or detailed with
    /// options in declaration order and flags clustered.
    pub fn synopsis(&self) -> String {
        SynopsisBuilder::new(self.config).build(self.options, self.parameters)
    }

    /// The detailed synopsis with options sorted by `order`, regardless of
    /// the abbreviate and custom settings.
    pub fn detailed_synopsis(&self, order: OptionOrder, cluster_flags: bool) -> String {
        SynopsisBuilder::new(self.config)
            .cluster_flags(cluster_flags)
            .detailed(order.sorted(self.options), self.parameters)
    }

    /// The default value-label renderer for this command's separator.
    pub fn value_label_renderer(&self) -> DefaultValueLabelRenderer {
        DefaultValueLabelRenderer::from_config(self.config)
    }

    /// Options sorted by shortest name, in the default five-column table.
    ///
    /// # Errors
    ///
    /// Fails when a rendered row does not match the table's columns.
    pub fn option_list(&self) -> Result<String> {
        self.option_list_with(
            Layout::for_command(self.config),
            OptionOrder::ShortestName,
            &self.value_label_renderer(),
        )
    }

    /// Options laid out with a caller-chosen layout, order and labels.
    ///
    /// # Errors
    ///
    /// Fails when a rendered row does not match the layout's table.
    pub fn option_list_with(
        &self,
        mut layout: Layout,
        order: OptionOrder,
        labels: &dyn ValueLabelRenderer,
    ) -> Result<String> {
        layout.add_options(order.sorted(self.options), labels)?;
        Ok(layout.to_text())
    }

    /// Positional parameters in the default five-column table, with bare labels.
    ///
    /// # Errors
    ///
    /// Fails when a rendered row does not match the table's columns.
    pub fn parameter_list(&self) -> Result<String> {
        self.parameter_list_with(Layout::for_command(self.config), &MinimalValueLabelRenderer)
    }

    /// Positional parameters laid out with a caller-chosen layout and labels.
    ///
    /// # Errors
    ///
    /// Fails when a rendered row does not match the layout's table.
    pub fn parameter_list_with(
        &self,
        mut layout: Layout,
        labels: &dyn ValueLabelRenderer,
    ) -> Result<String> {
        layout.add_positional_parameters(self.parameters, labels)?;
        Ok(layout.to_text())
    }

    /// The full usage text: header, `Usage: ` synopsis, description, option
    /// list, parameter list and footer. Empty sections contribute nothing.
    ///
    /// # Errors
    ///
    /// Fails when a rendered row does not match the table's columns.
    pub fn usage(&self) -> Result<String> {
        let sections = [
            self.header(),
            format!("{}{}", USAGE_PREFIX, self.synopsis()),
            self.description(),
            self.option_list()?,
            self.parameter_list()?,
            self.footer(),
        ];
        Ok(sections.concat())
    }
}
